//! Sign-in, registration and sign-out

use super::ApiClient;
use crate::auth::{Credentials, Identity, LoginResponse, Role};
use crate::error::Result;
use crate::models::{NewClient, NewFreelancer, StatusMessage};

impl ApiClient {
    /// Sign in through the role's login endpoint, store the issued token
    /// and adopt its identity
    pub async fn sign_in(&self, role: Role, credentials: &Credentials) -> Result<Identity> {
        let response: LoginResponse = self.post(role.login_path(), credentials).await?;
        let identity = self.session().establish(&response.access_token).await?;

        if identity.role != role {
            tracing::warn!(
                requested = %role,
                issued = %identity.role,
                "Token role differs from the requested sign-in role"
            );
        }
        Ok(identity)
    }

    pub async fn register_client(&self, client: &NewClient) -> Result<StatusMessage> {
        self.post("/client/register", client).await
    }

    pub async fn register_freelancer(&self, freelancer: &NewFreelancer) -> Result<StatusMessage> {
        self.post("/freelancer/register", freelancer).await
    }

    /// End the session locally. Tokens are stateless on the server, so
    /// there is nothing to revoke remotely.
    pub async fn sign_out(&self) {
        self.session().logout().await;
    }
}
