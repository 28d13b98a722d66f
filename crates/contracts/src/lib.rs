//! Wire contracts shared between the studio frontend and the management API.

pub mod database;
