//! Diesel schema for shift and task tables.

diesel::table! {
    /// Scheduled shifts.
    shifts (id) {
        /// Store-assigned identifier.
        id -> Int8,
        /// Calendar day the shift is planned for.
        date -> Timestamptz,
        /// Working window start.
        time_start -> Timestamptz,
        /// Working window end.
        time_end -> Timestamptz,
        /// Last roster edit.
        edited_at -> Timestamptz,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Tasks within shifts.
    tasks (id) {
        /// Store-assigned identifier.
        id -> Int8,
        /// Owning shift.
        shift_id -> Int8,
        /// Executing employee.
        executor -> Int8,
        /// Assigned robot (store id).
        robot_id -> Int8,
        /// Allocated transport, if any.
        transport_id -> Nullable<Int8>,
        /// Task window start.
        time_start -> Timestamptz,
        /// Task window end.
        time_end -> Timestamptz,
        /// Kind of work.
        #[max_length = 20]
        kind -> Varchar,
        /// Route payload for route tasks.
        geojson -> Nullable<Jsonb>,
        /// Name of the uploaded GeoJSON source file.
        #[max_length = 255]
        geojson_filename -> Nullable<Varchar>,
        /// Ticket references as a JSON array of strings.
        tickets -> Jsonb,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(tasks -> shifts (shift_id));
diesel::allow_tables_to_appear_in_same_query!(shifts, tasks);
