// Composition root for the timesheets service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the entity store and load the optional seed.
// - Wire the store into use case handlers.
// - Expose the handlers over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod seed;
pub mod state;
