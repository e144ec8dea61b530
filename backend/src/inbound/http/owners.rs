//! Owner screens: create, find, show and edit clinic owners.
//!
//! ```text
//! GET  /owners/new                  empty creation form
//! POST /owners/new                  validate and register
//! GET  /owners/find                 search form
//! GET  /owners?lastName=Davis       search by last-name prefix
//! GET  /owners/{ownerId}            owner details
//! GET  /owners/{ownerId}/edit       edit form bound to the stored owner
//! POST /owners/{ownerId}/edit       validate and update
//! ```
//!
//! Form failures are not errors: the form view is rendered again (HTTP 200)
//! with one annotation per offending field.

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{
    FieldError, FieldErrors, Owner, OwnerField, OwnerForm, OwnerId, SearchOutcome,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, OwnerFormSchema, ViewEnvelopeSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{OWNER_ID, parse_owner_id};
use crate::inbound::http::view::{ModelAndView, OwnerView};

/// Owner as bound to a form view; `id` is present only when editing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OwnerModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<OwnerId>,
    #[serde(flatten)]
    form: OwnerForm,
}

impl OwnerModel {
    fn transient(form: OwnerForm) -> Self {
        Self { id: None, form }
    }

    fn editing(id: OwnerId, form: OwnerForm) -> Self {
        Self { id: Some(id), form }
    }
}

impl From<&Owner> for OwnerModel {
    fn from(owner: &Owner) -> Self {
        Self::editing(owner.id(), OwnerForm::from(owner))
    }
}

#[derive(Serialize)]
struct OwnersListModel {
    selections: Vec<Owner>,
}

/// Query string for `GET /owners`.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct OwnerSearchQuery {
    /// Last-name prefix; omitted means every owner.
    pub last_name: Option<String>,
}

fn form_view(model: OwnerModel, errors: FieldErrors) -> ApiResult<ModelAndView> {
    Ok(ModelAndView::render(OwnerView::CreateOrUpdateForm, model)?.with_errors(errors))
}

/// Register every owner route.
///
/// The literal `/owners/new` and `/owners/find` routes are registered ahead of
/// `/owners/{ownerId}` so they are never read as identifiers.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use petclinic::inbound::http::owners;
///
/// let _app = App::new().configure(owners::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(init_creation_form)
        .service(process_creation_form)
        .service(init_find_form)
        .service(process_find_form)
        .service(init_update_owner_form)
        .service(process_update_owner_form)
        .service(show_owner);
}

/// Show an empty creation form.
#[utoipa::path(
    get,
    path = "/owners/new",
    responses(
        (status = 200, description = "Creation form", body = ViewEnvelopeSchema)
    ),
    tags = ["owners"],
    operation_id = "initCreationForm"
)]
#[get("/owners/new")]
pub async fn init_creation_form() -> ApiResult<ModelAndView> {
    form_view(OwnerModel::default(), FieldErrors::default())
}

/// Validate a submitted owner and register it.
#[utoipa::path(
    post,
    path = "/owners/new",
    request_body(content = OwnerFormSchema, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Form re-rendered with field errors", body = ViewEnvelopeSchema),
        (status = 302, description = "Owner created; redirect to its details"),
        (status = 503, description = "Owner directory unavailable", body = ErrorSchema)
    ),
    tags = ["owners"],
    operation_id = "processCreationForm"
)]
#[post("/owners/new")]
pub async fn process_creation_form(
    state: web::Data<HttpState>,
    form: web::Form<OwnerForm>,
) -> ApiResult<ModelAndView> {
    let form = form.into_inner();
    match form.validate() {
        Ok(details) => {
            let owner = state.owners.register(details).await?;
            Ok(ModelAndView::redirect_to_owner(owner.id()))
        }
        Err(errors) => {
            debug!(fields = %errors, "owner creation rejected");
            form_view(OwnerModel::transient(form), errors)
        }
    }
}

/// Show the search form.
#[utoipa::path(
    get,
    path = "/owners/find",
    responses(
        (status = 200, description = "Search form", body = ViewEnvelopeSchema)
    ),
    tags = ["owners"],
    operation_id = "initFindForm"
)]
#[get("/owners/find")]
pub async fn init_find_form() -> ApiResult<ModelAndView> {
    ModelAndView::render(OwnerView::FindOwners, OwnerModel::default())
}

/// Search owners by last-name prefix.
///
/// No match re-renders the search form with a `lastName` error, one match
/// redirects to that owner and several matches render the list.
#[utoipa::path(
    get,
    path = "/owners",
    params(OwnerSearchQuery),
    responses(
        (status = 200, description = "No match or list of matches", body = ViewEnvelopeSchema),
        (status = 302, description = "Single match; redirect to its details"),
        (status = 503, description = "Owner directory unavailable", body = ErrorSchema)
    ),
    tags = ["owners"],
    operation_id = "processFindForm"
)]
#[get("/owners")]
pub async fn process_find_form(
    state: web::Data<HttpState>,
    query: web::Query<OwnerSearchQuery>,
) -> ApiResult<ModelAndView> {
    let last_name = query.into_inner().last_name.unwrap_or_default();
    match state.owners.search(&last_name).await? {
        SearchOutcome::NoMatches => {
            let model = OwnerModel::transient(OwnerForm {
                last_name,
                ..OwnerForm::default()
            });
            Ok(ModelAndView::render(OwnerView::FindOwners, model)?.with_errors(
                FieldErrors::single(FieldError::not_found(OwnerField::LastName)),
            ))
        }
        SearchOutcome::Single(owner) => Ok(ModelAndView::redirect_to_owner(owner.id())),
        SearchOutcome::Many(selections) => {
            ModelAndView::render(OwnerView::OwnersList, OwnersListModel { selections })
        }
    }
}

/// Show the edit form bound to a stored owner.
#[utoipa::path(
    get,
    path = "/owners/{ownerId}/edit",
    params(("ownerId" = u32, Path, description = "Owner identifier")),
    responses(
        (status = 200, description = "Edit form", body = ViewEnvelopeSchema),
        (status = 400, description = "Malformed owner id", body = ErrorSchema),
        (status = 404, description = "Unknown owner", body = ErrorSchema)
    ),
    tags = ["owners"],
    operation_id = "initUpdateOwnerForm"
)]
#[get("/owners/{owner_id}/edit")]
pub async fn init_update_owner_form(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<ModelAndView> {
    let id = parse_owner_id(&path.into_inner(), OWNER_ID)?;
    let owner = state.owners.find(id).await?;
    form_view(OwnerModel::from(&owner), FieldErrors::default())
}

/// Validate submitted changes and update the owner, keeping its id.
#[utoipa::path(
    post,
    path = "/owners/{ownerId}/edit",
    params(("ownerId" = u32, Path, description = "Owner identifier")),
    request_body(content = OwnerFormSchema, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Form re-rendered with field errors", body = ViewEnvelopeSchema),
        (status = 302, description = "Owner updated; redirect to its details"),
        (status = 400, description = "Malformed owner id", body = ErrorSchema),
        (status = 404, description = "Unknown owner", body = ErrorSchema)
    ),
    tags = ["owners"],
    operation_id = "processUpdateOwnerForm"
)]
#[post("/owners/{owner_id}/edit")]
pub async fn process_update_owner_form(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    form: web::Form<OwnerForm>,
) -> ApiResult<ModelAndView> {
    let id = parse_owner_id(&path.into_inner(), OWNER_ID)?;
    let form = form.into_inner();
    let details = match form.validate() {
        Ok(details) => details,
        Err(errors) => {
            state.owners.find(id).await?;
            debug!(owner_id = %id, fields = %errors, "owner update rejected");
            return form_view(OwnerModel::editing(id, form), errors);
        }
    };
    let owner = state.owners.update(id, details).await?;
    Ok(ModelAndView::redirect_to_owner(owner.id()))
}

/// Show a single owner.
#[utoipa::path(
    get,
    path = "/owners/{ownerId}",
    params(("ownerId" = u32, Path, description = "Owner identifier")),
    responses(
        (status = 200, description = "Owner details", body = ViewEnvelopeSchema),
        (status = 400, description = "Malformed owner id", body = ErrorSchema),
        (status = 404, description = "Unknown owner", body = ErrorSchema)
    ),
    tags = ["owners"],
    operation_id = "showOwner"
)]
#[get("/owners/{owner_id}")]
pub async fn show_owner(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<ModelAndView> {
    let id = parse_owner_id(&path.into_inner(), OWNER_ID)?;
    let owner = state.owners.find(id).await?;
    ModelAndView::render(OwnerView::OwnerDetails, owner)
}
