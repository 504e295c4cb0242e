//! Diesel schema for roster reference tables.

diesel::table! {
    /// Field operators available for shift tasks.
    employees (id) {
        /// Store-assigned identifier.
        id -> Int8,
        /// Given name.
        #[max_length = 100]
        firstname -> Varchar,
        /// Family name.
        #[max_length = 100]
        lastname -> Varchar,
        /// Optional patronymic.
        #[max_length = 100]
        patronymic -> Nullable<Varchar>,
        /// Messaging handle.
        #[max_length = 50]
        tg -> Nullable<Varchar>,
        /// Staff directory tag.
        #[max_length = 200]
        staff -> Nullable<Varchar>,
        /// Body/group tag.
        #[max_length = 200]
        body -> Nullable<Varchar>,
        /// Licensed to drive transport.
        drive -> Bool,
        /// Holds a parking permit.
        parking -> Bool,
        /// Passed the telemedicine check.
        telemedicine -> Bool,
        /// Holds a power of attorney.
        attorney -> Bool,
        /// Has access to the auto-VC system.
        auto_vc_access -> Bool,
        /// Crew membership.
        crew -> Nullable<Int8>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Vehicles available for shift tasks.
    transports (id) {
        /// Store-assigned identifier.
        id -> Int8,
        /// Display name.
        #[max_length = 200]
        name -> Varchar,
        /// Vehicle model.
        #[max_length = 200]
        model -> Nullable<Varchar>,
        /// Government registration plate.
        #[max_length = 20]
        gov_number -> Nullable<Varchar>,
        /// Rented through a carsharing service.
        carsharing -> Bool,
        /// Part of the corporate fleet.
        corporate -> Bool,
        /// Fitted for auto-VC operation.
        auto_vc -> Bool,
        /// Currently blocked from dispatch.
        has_blockers -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Delivery robots in the fleet.
    robots (id) {
        /// Store-assigned identifier.
        id -> Int8,
        /// Fleet-facing business number, unique.
        number -> Int8,
        /// Hardware series.
        series -> Int8,
        /// Currently blocked from dispatch.
        has_blockers -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Employee crews.
    crews (id) {
        /// Store-assigned identifier.
        id -> Int8,
        /// Crew name.
        #[max_length = 200]
        name -> Varchar,
        /// Free-form description.
        description -> Nullable<Text>,
        /// Advisory member capacity.
        max_members -> Int4,
        /// Owning account placeholder.
        owner_id -> Int8,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
