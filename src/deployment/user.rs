//! Deployment user role management.
//!
//! Each operation issues one Houston mutation and, on success, writes a
//! single confirmation line. Failures carry the server's message unchanged
//! and write nothing.

use std::io::Write;

use houston::{HoustonClient, Transport};
use tracing::debug;

use crate::error::Result;

/// Grant `role` on a deployment to `email`.
///
/// # Errors
///
/// Returns the Houston error (duplicate binding, invalid role, transport
/// failure) or an I/O error from `out`.
pub fn add_user<T: Transport, W: Write>(
    deployment_id: &str,
    email: &str,
    role: &str,
    client: &HoustonClient<T>,
    out: &mut W,
) -> Result<()> {
    debug!(deployment_id, email, role, "adding deployment user");
    let binding = client.add_deployment_user(deployment_id, email, role)?;
    writeln!(
        out,
        "Successfully added {} as a {}",
        email, binding.role
    )?;
    Ok(())
}

/// Remove the role `email` holds on a deployment.
///
/// # Errors
///
/// Returns the Houston error (no such binding, transport failure) or an I/O
/// error from `out`.
pub fn delete_user<T: Transport, W: Write>(
    deployment_id: &str,
    email: &str,
    client: &HoustonClient<T>,
    out: &mut W,
) -> Result<()> {
    debug!(deployment_id, email, "removing deployment user");
    let binding = client.remove_deployment_user(deployment_id, email)?;
    writeln!(
        out,
        "Successfully removed the {} role for {} from deployment {}",
        binding.role, email, deployment_id
    )?;
    Ok(())
}

/// Change the role `email` holds on a deployment.
///
/// # Errors
///
/// Returns the Houston error (invalid role, transport failure) or an I/O
/// error from `out`.
pub fn update_user<T: Transport, W: Write>(
    deployment_id: &str,
    email: &str,
    role: &str,
    client: &HoustonClient<T>,
    out: &mut W,
) -> Result<()> {
    debug!(deployment_id, email, role, "updating deployment user");
    let binding = client.update_deployment_user(deployment_id, email, role)?;
    writeln!(
        out,
        "Successfully updated {} to a {}",
        email, binding.role
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use houston::{FnTransport, HttpRequest, HttpResponse, Role};
    use tracing::info;

    const DEPLOYMENT_ID: &str = "ckggzqj5f4157qtc9lescmehm";
    const EMAIL: &str = "somebody@astronomer.com";

    fn init_logging() {
        crate::logging::init_test_logging();
    }

    fn client(
        status: u16,
        body: impl Into<String>,
    ) -> HoustonClient<FnTransport<impl Fn(&HttpRequest) -> HttpResponse>> {
        let body = body.into();
        HoustonClient::new(
            FnTransport::new(move |_req: &HttpRequest| HttpResponse::new(status, body.clone())),
            "https://houston.local.astronomer.io:443/v1",
        )
    }

    fn binding_response(field: &str, role: &str) -> String {
        binding_response_for(field, EMAIL, role)
    }

    fn binding_response_for(field: &str, username: &str, role: &str) -> String {
        format!(
            r#"{{
                "data": {{
                    "{field}": {{
                        "id": "{DEPLOYMENT_ID}",
                        "user": {{ "username": "{username}" }},
                        "role": "{role}",
                        "deployment": {{ "releaseName": "prehistoric-gravity-9229" }}
                    }}
                }}
            }}"#
        )
    }

    #[test]
    fn test_add_success() {
        init_logging();
        info!("test_add_success: starting");
        let api = client(
            200,
            binding_response("deploymentAddUserRole", "DEPLOYMENT_ADMIN"),
        );

        let mut buf = Vec::new();
        add_user(
            DEPLOYMENT_ID,
            EMAIL,
            Role::DeploymentAdmin.as_str(),
            &api,
            &mut buf,
        )
        .unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("Successfully added somebody@astronomer.com as a DEPLOYMENT_ADMIN"));
    }

    #[test]
    fn test_confirmation_uses_requested_email() {
        init_logging();
        let add = client(
            200,
            binding_response_for(
                "deploymentAddUserRole",
                "Somebody@Astronomer.com",
                "DEPLOYMENT_ADMIN",
            ),
        );
        let mut buf = Vec::new();
        add_user(DEPLOYMENT_ID, EMAIL, "DEPLOYMENT_ADMIN", &add, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Successfully added somebody@astronomer.com as a DEPLOYMENT_ADMIN\n"
        );

        let update = client(
            200,
            binding_response_for(
                "deploymentUpdateUserRole",
                "Somebody@Astronomer.com",
                "DEPLOYMENT_VIEWER",
            ),
        );
        let mut buf = Vec::new();
        update_user(DEPLOYMENT_ID, EMAIL, "DEPLOYMENT_VIEWER", &update, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Successfully updated somebody@astronomer.com to a DEPLOYMENT_VIEWER\n"
        );
    }

    #[test]
    fn test_add_duplicate_binding() {
        init_logging();
        let api = client(
            200,
            r#"{
                "errors": [
                    {
                        "message": "A duplicate role binding already exists",
                        "locations": [{ "line": 2, "column": 3 }],
                        "path": ["deploymentAddUserRole"],
                        "extensions": {
                            "code": "BAD_USER_INPUT",
                            "exception": {
                                "message": "A duplicate role binding already exists",
                                "stacktrace": ["UserInputError: A duplicate role binding already exists"]
                            }
                        }
                    }
                ],
                "data": { "deploymentAddUserRole": null }
            }"#,
        );

        let mut buf = Vec::new();
        let err = add_user(DEPLOYMENT_ID, EMAIL, "DEPLOYMENT_ADMIN", &api, &mut buf).unwrap_err();
        assert!(
            err.to_string()
                .contains("A duplicate role binding already exists")
        );
        assert_eq!(
            err.server_message(),
            Some("A duplicate role binding already exists")
        );
        assert!(buf.is_empty());
    }

    #[test]
    fn test_delete_user_success() {
        init_logging();
        let api = client(
            200,
            binding_response("deploymentRemoveUserRole", "DEPLOYMENT_ADMIN"),
        );

        let mut buf = Vec::new();
        delete_user(DEPLOYMENT_ID, EMAIL, &api, &mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains(
            "Successfully removed the DEPLOYMENT_ADMIN role for somebody@astronomer.com from deployment ckggzqj5f4157qtc9lescmehm"
        ));
    }

    #[test]
    fn test_delete_user_missing_binding() {
        init_logging();
        let api = client(
            400,
            r#"{
                "errors": [
                    {
                        "message": "The role binding does not exist for this user",
                        "locations": [{ "line": 2, "column": 3 }],
                        "path": ["deploymentRemoveUserRole"],
                        "extensions": { "code": "BAD_USER_INPUT" }
                    }
                ],
                "data": { "deploymentRemoveUserRole": null }
            }"#,
        );

        let mut buf = Vec::new();
        let err = delete_user(DEPLOYMENT_ID, EMAIL, &api, &mut buf).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The role binding does not exist for this user"
        );
        assert!(buf.is_empty());
    }

    #[test]
    fn test_update_user_success() {
        init_logging();
        let api = client(
            200,
            binding_response("deploymentUpdateUserRole", "DEPLOYMENT_EDITOR"),
        );

        let mut buf = Vec::new();
        update_user(
            DEPLOYMENT_ID,
            EMAIL,
            Role::DeploymentEditor.as_str(),
            &api,
            &mut buf,
        )
        .unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("Successfully updated somebody@astronomer.com to a DEPLOYMENT_EDITOR"));
    }

    #[test]
    fn test_update_user_invalid_role() {
        init_logging();
        let api = client(
            400,
            r#"{
                "error": {
                    "errors": [
                        {
                            "message": "Variable \"$role\" got invalid value \"DEPLOYMENT_FAKE_ROLE\"; Expected type Role. Did you mean DEPLOYMENT_ADMIN, DEPLOYMENT_EDITOR, or DEPLOYMENT_VIEWER?",
                            "locations": [{ "line": 1, "column": 85 }],
                            "extensions": { "code": "INTERNAL_SERVER_ERROR" }
                        }
                    ]
                }
            }"#,
        );

        let mut buf = Vec::new();
        let err = update_user(DEPLOYMENT_ID, EMAIL, "DEPLOYMENT_FAKE_ROLE", &api, &mut buf)
            .unwrap_err();
        assert!(err.to_string().contains(
            "Expected type Role. Did you mean DEPLOYMENT_ADMIN, DEPLOYMENT_EDITOR, or DEPLOYMENT_VIEWER"
        ));
        assert!(buf.is_empty());
    }
}
