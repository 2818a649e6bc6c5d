/*
* Greeting API endpoints and routes module.
* Two fixed-text endpoints served at `/` and `/hello`.
*/

pub mod handler;
pub mod routes;

pub use routes::greeting_routes;
