//! Authentication and profile endpoints.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use super::client::{ApiClient, ApiRequest};
use super::form::MultipartFields;
use crate::domain::ports::{AuthGateway, LoginPayload, ProfilePayload};
use crate::domain::{AdminUser, ApiError, Envelope, LoginCredentials, ProfileUpdate};

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

/// [`AuthGateway`] over `admin/login` and `admin/profile`.
pub struct HttpAuthGateway {
    client: Arc<ApiClient>,
}

impl HttpAuthGateway {
    /// Gateway sharing `client`.
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

fn profile_form(update: &ProfileUpdate) -> MultipartFields {
    MultipartFields::default()
        .text("fullName", update.full_name.as_deref())
        .text("mobileNumber", update.mobile_number.as_deref())
        .text("gender", update.gender.as_deref())
        .text("address", update.address.as_deref())
        .text("city", update.city.as_deref())
        .text("state", update.state.as_deref())
        .text("country", update.country.as_deref())
        .text("pincode", update.pincode.as_deref())
        .file("profileImage", update.profile_image.as_ref())
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn login(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<Envelope<LoginPayload>, ApiError> {
        let request = ApiRequest::post(&["admin", "login"])
            .json(&LoginBody {
                email: credentials.email(),
                password: credentials.password(),
            })?
            .show_success();
        self.client.send(request).await
    }

    async fn fetch_profile(&self) -> Result<AdminUser, ApiError> {
        let envelope: Envelope<ProfilePayload> =
            self.client.send(ApiRequest::get(&["admin", "profile"])).await?;
        envelope
            .data
            .and_then(|payload| payload.user)
            .ok_or_else(|| ApiError::decode("profile response did not include a user"))
    }

    async fn update_profile(
        &self,
        update: &ProfileUpdate,
    ) -> Result<Envelope<ProfilePayload>, ApiError> {
        let request = ApiRequest::put(&["admin", "profile"])
            .multipart(profile_form(update))
            .show_success();
        self.client.send(request).await
    }
}
