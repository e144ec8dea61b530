//! Model-and-view responses for the owner screens.
//!
//! Handlers return a [`ModelAndView`]: either a named view rendered as a JSON
//! envelope (`{"view", "model", "errors"}`) with HTTP 200, or a redirect
//! answered with HTTP 302 and a `Location` header. Both carry the logical
//! view name in the `X-View-Name` header.

use actix_web::body::BoxBody;
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::Serialize;
use serde_json::Value;

use crate::domain::{Error, FieldErrors, OwnerId};

/// Header exposing the logical view name.
pub const VIEW_NAME_HEADER: &str = "x-view-name";

const REDIRECT_PREFIX: &str = "redirect:";

/// Views served by the owner handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerView {
    CreateOrUpdateForm,
    FindOwners,
    OwnersList,
    OwnerDetails,
}

impl OwnerView {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreateOrUpdateForm => "owners/createOrUpdateOwnerForm",
            Self::FindOwners => "owners/findOwners",
            Self::OwnersList => "owners/ownersList",
            Self::OwnerDetails => "owners/ownerDetails",
        }
    }
}

#[derive(Serialize)]
struct ViewEnvelope<'a> {
    view: &'static str,
    model: &'a Value,
    errors: &'a FieldErrors,
}

/// Outcome of an owner handler.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelAndView {
    Render {
        view: OwnerView,
        model: Value,
        errors: FieldErrors,
    },
    Redirect {
        location: String,
    },
}

impl ModelAndView {
    /// Render `view` with `model` and no field errors.
    ///
    /// # Errors
    /// An internal error if `model` cannot be represented as JSON.
    pub fn render(view: OwnerView, model: impl Serialize) -> Result<Self, Error> {
        let model = serde_json::to_value(model)
            .map_err(|err| Error::internal(format!("failed to serialise view model: {err}")))?;
        Ok(Self::Render {
            view,
            model,
            errors: FieldErrors::default(),
        })
    }

    /// Attach field errors to a rendered view. Redirects are returned as is.
    #[must_use]
    pub fn with_errors(self, field_errors: FieldErrors) -> Self {
        match self {
            Self::Render { view, model, .. } => Self::Render {
                view,
                model,
                errors: field_errors,
            },
            redirect @ Self::Redirect { .. } => redirect,
        }
    }

    /// Redirect to an arbitrary application path.
    pub fn redirect(location: impl Into<String>) -> Self {
        Self::Redirect {
            location: location.into(),
        }
    }

    /// Redirect to an owner's detail page.
    ///
    /// # Examples
    /// ```
    /// use petclinic::domain::OwnerId;
    /// use petclinic::inbound::http::view::ModelAndView;
    ///
    /// let id = OwnerId::new(1).expect("owner id");
    /// assert_eq!(ModelAndView::redirect_to_owner(id).view_name(), "redirect:/owners/1");
    /// ```
    #[must_use]
    pub fn redirect_to_owner(id: OwnerId) -> Self {
        Self::redirect(format!("/owners/{id}"))
    }

    /// Logical view name, `redirect:`-prefixed for redirects.
    pub fn view_name(&self) -> String {
        match self {
            Self::Render { view, .. } => view.as_str().to_owned(),
            Self::Redirect { location } => format!("{REDIRECT_PREFIX}{location}"),
        }
    }
}

impl Responder for ModelAndView {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        let view_name = self.view_name();
        match self {
            Self::Render {
                view,
                model,
                errors,
            } => HttpResponse::Ok()
                .insert_header((VIEW_NAME_HEADER, view_name))
                .json(ViewEnvelope {
                    view: view.as_str(),
                    model: &model,
                    errors: &errors,
                }),
            Self::Redirect { location } => HttpResponse::Found()
                .insert_header((header::LOCATION, location))
                .insert_header((VIEW_NAME_HEADER, view_name))
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FieldError, OwnerField};
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;
    use rstest::rstest;
    use serde_json::json;

    fn header_str<'a>(res: &'a HttpResponse, name: &str) -> Option<&'a str> {
        res.headers().get(name).and_then(|value| value.to_str().ok())
    }

    #[rstest]
    #[case(OwnerView::CreateOrUpdateForm, "owners/createOrUpdateOwnerForm")]
    #[case(OwnerView::FindOwners, "owners/findOwners")]
    #[case(OwnerView::OwnersList, "owners/ownersList")]
    #[case(OwnerView::OwnerDetails, "owners/ownerDetails")]
    fn view_names(#[case] view: OwnerView, #[case] expected: &str) {
        assert_eq!(view.as_str(), expected);
    }

    #[actix_web::test]
    async fn rendered_view_is_a_json_envelope() {
        let req = TestRequest::default().to_http_request();
        let view = ModelAndView::render(OwnerView::FindOwners, json!({"lastName": "Nobody"}))
            .expect("model serialises")
            .with_errors(FieldErrors::single(FieldError::not_found(
                OwnerField::LastName,
            )));

        let res = view.respond_to(&req);
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            header_str(&res, VIEW_NAME_HEADER),
            Some("owners/findOwners")
        );

        let body = actix_web::body::to_bytes(res.into_body())
            .await
            .expect("body");
        let value: Value = serde_json::from_slice(&body).expect("json body");
        assert_eq!(
            value,
            json!({
                "view": "owners/findOwners",
                "model": {"lastName": "Nobody"},
                "errors": [{"field": "lastName", "code": "notFound", "message": "not found"}],
            })
        );
    }

    #[actix_web::test]
    async fn redirect_sets_location_and_view_name() {
        let req = TestRequest::default().to_http_request();
        let id = OwnerId::new(11).expect("owner id");

        let res = ModelAndView::redirect_to_owner(id).respond_to(&req);
        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(header_str(&res, "location"), Some("/owners/11"));
        assert_eq!(
            header_str(&res, VIEW_NAME_HEADER),
            Some("redirect:/owners/11")
        );
    }

    #[test]
    fn errors_are_not_attached_to_redirects() {
        let redirect = ModelAndView::redirect("/owners/3")
            .with_errors(FieldErrors::single(FieldError::required(OwnerField::City)));
        assert_eq!(redirect, ModelAndView::redirect("/owners/3"));
    }
}
