//! Submission request decoding shared by the record handlers.
//!
//! A submission body is a JSON object of record fields plus an optional
//! `image` object carrying a base64 payload. Field typing is left to the
//! domain validators; this module only peels off the image and the path id.

use actix_web::web;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::trace;
use utoipa::ToSchema;

use crate::domain::ports::RecordRepository;
use crate::domain::{
    Error, FormRecord, FormSubmission, ImageUpload, Persisted, ProgressSink, RawForm, RecordId,
    SubmissionError, ValidationErrors,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

const IMAGE_FIELD: &str = "image";

/// Image attached to a submission.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageBody {
    /// Original file name, forwarded to the media host.
    #[schema(example = "cement.png")]
    pub file_name: String,
    /// MIME type; must be `image/*`.
    #[schema(example = "image/png")]
    pub content_type: String,
    /// Standard base64 encoding of the file bytes.
    pub data: String,
}

impl TryFrom<ImageBody> for ImageUpload {
    type Error = ValidationErrors;

    fn try_from(body: ImageBody) -> Result<Self, Self::Error> {
        let data = STANDARD.decode(body.data.trim()).map_err(|_| {
            ValidationErrors::single(IMAGE_FIELD, "Image data must be base64 encoded")
        })?;
        Ok(ImageUpload::new(body.file_name, body.content_type, data))
    }
}

fn take_image(fields: &mut RawForm) -> Result<Option<ImageUpload>, ValidationErrors> {
    match fields.remove(IMAGE_FIELD) {
        None | Some(Value::Null) => Ok(None),
        Some(raw) => {
            let body: ImageBody = serde_json::from_value(raw).map_err(|_| {
                ValidationErrors::single(
                    IMAGE_FIELD,
                    "Image must include fileName, contentType, and data",
                )
            })?;
            ImageUpload::try_from(body).map(Some)
        }
    }
}

/// Parse a path identifier, reporting failures like any other field error.
pub(crate) fn parse_record_id(raw: &str) -> ApiResult<RecordId> {
    raw.trim().parse().map_err(|_| {
        Error::invalid_request("submission failed validation").with_details(json!({
            "fields": ValidationErrors::single("id", "Id must be a valid identifier"),
        }))
    })
}

fn progress_logger(kind: &'static str) -> ProgressSink {
    ProgressSink::new(move |progress| {
        trace!(kind = kind, sent = progress.sent, total = progress.total, "upload progress");
    })
}

/// Build a submission from `body`, then run it through the shared flow.
///
/// An undecodable image is reported together with the record's own field
/// errors so clients see every problem in one response.
pub(crate) async fn submit<R: FormRecord>(
    state: &HttpState,
    repository: &dyn RecordRepository<R>,
    id: Option<RecordId>,
    body: web::Json<RawForm>,
) -> ApiResult<Persisted<R>> {
    let mut fields = body.into_inner();
    let image = match take_image(&mut fields) {
        Ok(image) => image,
        Err(mut errors) => {
            if let Err(field_errors) = R::validate(&fields) {
                errors.extend(field_errors);
            }
            return Err(SubmissionError::Validation(errors).into());
        }
    };

    let submission = match id {
        Some(id) => FormSubmission::update(id, fields),
        None => FormSubmission::create(fields),
    };
    let submission = match image {
        Some(image) => submission.with_image(image),
        None => submission,
    };

    state
        .submissions
        .submit(repository, submission, progress_logger(R::KIND))
        .await
        .map_err(Error::from)
}
