//! `houston` — blocking GraphQL client for the Astronomer Houston API.
//!
//! Only the deployment-user mutations are modelled. The HTTP layer sits
//! behind the [`Transport`] trait so callers can substitute canned
//! responses.
//!
//! # Quick Start
//!
//! ```no_run
//! use houston::{HoustonClient, HttpTransport, Role};
//!
//! let transport = HttpTransport::new().unwrap();
//! let client = HoustonClient::new(transport, "https://houston.example.com:443/v1")
//!     .with_token("token");
//!
//! let binding = client
//!     .add_deployment_user("ckggzqj5f4157qtc9lescmehm", "somebody@astronomer.com", Role::DeploymentAdmin.as_str())
//!     .unwrap();
//! println!("{} is now {}", binding.user.username, binding.role);
//! ```

pub mod client;
pub mod error;
pub mod model;
pub mod request;
pub mod transport;

pub use client::HoustonClient;
pub use error::{HoustonError, Result};
pub use model::{DeploymentRef, DeploymentUserRole, Role, RoleUser};
pub use request::{DeploymentUserMutation, GraphQlRequest};
pub use transport::{FnTransport, HttpRequest, HttpResponse, HttpTransport, Transport};
