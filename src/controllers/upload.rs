use crate::api::endpoints::optimize_url;
use crate::api::errors::ApiError;
use crate::api::requests::UploadPayload;
use crate::api::responses::UploadResult;
use crate::api::MapBackend;
use crate::app_context::{InteractionContext, PageContext};
use crate::controllers::consts::{
    INVALID_VEHICLE_COUNT, NO_FILE_SELECTED, UPLOAD_ERROR, UPLOAD_FAILED, UPLOAD_REJECTED,
};
use crate::controllers::errors::InteractionError;
use crate::dom::ids::{
    DATABASE_UPLOAD_FORM, DATABASE_VEHICLES_INPUT, FILE_INPUT, UPLOAD_FORM, UPLOAD_STATS,
    UPLOAD_VEHICLES_INPUT,
};
use crate::dom::{Document, Element};
use url::Url;

#[derive(Debug, Clone, PartialEq)]
pub struct Navigated {
    pub result: UploadResult,
    pub target: Url,
}

struct FileUploadForm<E> {
    file_input: E,
    vehicles_input: E,
}

/// The two submission paths of the optimize page. Both end in the same upload routine,
/// which sends the browser to the optimization view when the server accepts the data.
pub struct UploadController<D: Document, B: MapBackend> {
    context: PageContext<D, B>,
    file_form: Option<FileUploadForm<D::Element>>,
    database_vehicles_input: Option<D::Element>,
}

impl<D, B> UploadController<D, B>
where
    D: Document,
    B: MapBackend,
{
    /// Each path binds on its own; a page missing one form still serves the other.
    pub fn bind(context: PageContext<D, B>) -> Self {
        let document = &context.document;
        let file_form = match (
            document.element(UPLOAD_FORM),
            document.element(FILE_INPUT),
            document.element(UPLOAD_VEHICLES_INPUT),
        ) {
            (Some(_form), Some(file_input), Some(vehicles_input)) => Some(FileUploadForm {
                file_input,
                vehicles_input,
            }),
            _ => None,
        };
        let database_vehicles_input = document
            .element(DATABASE_UPLOAD_FORM)
            .and(document.element(DATABASE_VEHICLES_INPUT));
        Self {
            context,
            file_form,
            database_vehicles_input,
        }
    }

    pub async fn submit_file_upload(&self) -> Result<Navigated, InteractionError> {
        let form = self
            .file_form
            .as_ref()
            .ok_or(InteractionError::Unbound(UPLOAD_FORM))?;
        let Some(file) = form.file_input.selected_file() else {
            self.context.notifier.alert(NO_FILE_SELECTED);
            return Err(InteractionError::Validation(NO_FILE_SELECTED.to_string()));
        };
        let num_vehicles = self.vehicle_count(&form.vehicles_input)?;

        tracing::info!(
            task = "upload",
            file_name = %file.name,
            num_vehicles,
            "Uploading file.",
        );
        self.upload(UploadPayload::File { file, num_vehicles }).await
    }

    pub async fn submit_database_upload(&self) -> Result<Navigated, InteractionError> {
        let vehicles_input = self
            .database_vehicles_input
            .as_ref()
            .ok_or(InteractionError::Unbound(DATABASE_UPLOAD_FORM))?;
        let num_vehicles = self.vehicle_count(vehicles_input)?;

        tracing::info!(task = "upload", num_vehicles, "Loading vehicles from database.");
        self.upload(UploadPayload::Database { num_vehicles }).await
    }

    pub async fn upload(&self, payload: UploadPayload) -> Result<Navigated, InteractionError> {
        let interaction = InteractionContext::new();
        let outcome = self.send(payload, &interaction).await;
        tracing::info!(
            task = "upload",
            interaction_id = %interaction.interaction_id,
            success = outcome.is_ok(),
            processing_time_ms = interaction.processing_time_ms(),
        );
        outcome
    }

    async fn send(
        &self,
        payload: UploadPayload,
        interaction: &InteractionContext,
    ) -> Result<Navigated, InteractionError> {
        let result = match self.context.backend.upload(payload).await {
            Ok(result) => result,
            Err(ApiError::Status { status, body }) => {
                tracing::error!(
                    interaction_id = %interaction.interaction_id,
                    %status,
                    %body,
                    "Server error.",
                );
                self.context.notifier.alert(UPLOAD_REJECTED);
                return Err(InteractionError::ServerRejection { status, body });
            }
            Err(error) => return Err(self.upload_error(error, interaction)),
        };

        let Some(result) = result else {
            self.context.notifier.alert(UPLOAD_FAILED);
            return Err(InteractionError::EmptyResult);
        };

        let target = optimize_url(self.context.backend.base_url(), &result)
            .map_err(|error| self.upload_error(error, interaction))?;

        if let Some(upload_stats) = self.context.document.element(UPLOAD_STATS) {
            upload_stats.set_inner_html("");
        }
        tracing::info!(
            interaction_id = %interaction.interaction_id,
            filename = %result.filename,
            "File uploaded successfully.",
        );
        self.context.navigator.navigate(target.clone());

        Ok(Navigated { result, target })
    }

    fn upload_error(&self, error: ApiError, interaction: &InteractionContext) -> InteractionError {
        tracing::error!(
            interaction_id = %interaction.interaction_id,
            %error,
            "Upload error.",
        );
        self.context.notifier.alert(UPLOAD_ERROR);
        InteractionError::Network(error)
    }

    /// Empty input counts as zero vehicles.
    fn vehicle_count(&self, input: &D::Element) -> Result<u32, InteractionError> {
        let raw = input.value();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(0);
        }
        trimmed.parse().map_err(|_| {
            let message = format!("{INVALID_VEHICLE_COUNT}{trimmed}");
            self.context.notifier.alert(&message);
            InteractionError::Validation(message)
        })
    }
}
