//! Diesel table definitions for the leaderboard schema.
//!
//! Keep these in step with `backend/migrations`; `diesel print-schema`
//! regenerates them from a live database.

diesel::table! {
    /// Leaderboard participants.
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Display name, trimmed, at most 64 characters.
        name -> Varchar,
        /// Running total of claimed points; never negative.
        total_points -> Int8,
        /// Registration instant; breaks leaderboard ties.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Append-only claim history.
    claim_events (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Claiming user.
        user_id -> Uuid,
        /// Award in `1..=10`.
        points_claimed -> Int2,
        /// Instant of the claim, stamped at commit.
        claimed_at -> Timestamptz,
        /// Insertion sequence; breaks `claimed_at` ties.
        seq -> Int8,
    }
}

diesel::joinable!(claim_events -> users (user_id));
diesel::allow_tables_to_appear_in_same_query!(claim_events, users);
