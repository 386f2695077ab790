//! Route tables: user resource routes and common operational routes.

mod common;
mod users;
pub use common::{common_routes, common_routes_with_ready};
pub use users::user_routes;
