//! Gatekeeping for the create/edit forms.
//!
//! Numeric inputs are kept as a [`NumericEntry`] while the user types, so an
//! empty box and a typed `0` stay distinguishable until the form is validated.

use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_with::{serde_as, NoneAsEmptyString, PickFirst};
use tracing::error;

use crate::models::{CategoryFormData, CategoryPatch, ViewPoint, ViewPointFormData, ViewPointPatch};

pub const NAME_REQUIRED: &str = "Name is required";
pub const LATITUDE_REQUIRED: &str = "Latitude is required";
pub const LATITUDE_RANGE: &str = "Latitude must be between -90 and 90";
pub const LONGITUDE_REQUIRED: &str = "Longitude is required";
pub const LONGITUDE_RANGE: &str = "Longitude must be between -180 and 180";
pub const ELEVATION_NUMBER: &str = "Elevation must be a number";
pub const RATING_RANGE: &str = "Rating must be between 0 and 5";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Description,
    Latitude,
    Longitude,
    Elevation,
    #[serde(rename = "category_id")]
    Category,
    Rating,
}

/// Per-field error messages. Empty means the record may be submitted.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    fn insert(&mut self, field: Field, message: &str) {
        self.0.insert(field, message.to_string());
    }

    fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    fn note(&mut self, field: Field, problem: Option<&str>) {
        if let Some(message) = problem {
            self.insert(field, message);
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.values().map(String::as_str).collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// What the user typed into a numeric box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum NumericEntry {
    #[default]
    Empty,
    Invalid,
    Value(f64),
}

impl NumericEntry {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return NumericEntry::Empty;
        }
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => NumericEntry::Value(value),
            _ => NumericEntry::Invalid,
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            NumericEntry::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl From<f64> for NumericEntry {
    fn from(value: f64) -> Self {
        if value.is_finite() {
            NumericEntry::Value(value)
        } else {
            NumericEntry::Invalid
        }
    }
}

impl From<Option<f64>> for NumericEntry {
    fn from(value: Option<f64>) -> Self {
        value.map_or(NumericEntry::Empty, NumericEntry::from)
    }
}

impl Serialize for NumericEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NumericEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        Ok(match Option::<Raw>::deserialize(deserializer)? {
            None => NumericEntry::Empty,
            Some(Raw::Number(value)) => NumericEntry::from(value),
            Some(Raw::Text(text)) => NumericEntry::parse(&text),
        })
    }
}

/// Raw form input as posted by the browser. Numbers may arrive as JSON
/// numbers or as the text of the input box.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewPointDraft {
    pub name: String,
    pub description: Option<String>,
    pub latitude: NumericEntry,
    pub longitude: NumericEntry,
    pub elevation: NumericEntry,
    #[serde_as(as = "PickFirst<(_, NoneAsEmptyString)>")]
    pub category_id: Option<i32>,
    pub rating: NumericEntry,
    pub is_public: bool,
}

impl Default for ViewPointDraft {
    fn default() -> Self {
        ViewPointDraft {
            name: String::new(),
            description: None,
            latitude: NumericEntry::Empty,
            longitude: NumericEntry::Empty,
            elevation: NumericEntry::Empty,
            category_id: None,
            rating: NumericEntry::Empty,
            is_public: true,
        }
    }
}

fn check_name(name: &str) -> Option<&'static str> {
    name.trim().is_empty().then_some(NAME_REQUIRED)
}

fn check_latitude(latitude: f64) -> Option<&'static str> {
    (!(-90.0..=90.0).contains(&latitude)).then_some(LATITUDE_RANGE)
}

fn check_longitude(longitude: f64) -> Option<&'static str> {
    (!(-180.0..=180.0).contains(&longitude)).then_some(LONGITUDE_RANGE)
}

fn check_rating(rating: f64) -> Option<&'static str> {
    (!(0.0..=5.0).contains(&rating)).then_some(RATING_RANGE)
}

fn required_latitude(entry: NumericEntry) -> Result<f64, &'static str> {
    match entry {
        NumericEntry::Empty => Err(LATITUDE_REQUIRED),
        NumericEntry::Invalid => Err(LATITUDE_RANGE),
        NumericEntry::Value(value) => check_latitude(value).map_or(Ok(value), Err),
    }
}

fn required_longitude(entry: NumericEntry) -> Result<f64, &'static str> {
    match entry {
        NumericEntry::Empty => Err(LONGITUDE_REQUIRED),
        NumericEntry::Invalid => Err(LONGITUDE_RANGE),
        NumericEntry::Value(value) => check_longitude(value).map_or(Ok(value), Err),
    }
}

fn optional_elevation(entry: NumericEntry) -> Result<Option<f64>, &'static str> {
    match entry {
        NumericEntry::Invalid => Err(ELEVATION_NUMBER),
        entry => Ok(entry.value()),
    }
}

/// An empty rating box means no rating, stored as 0.
fn rating_value(entry: NumericEntry) -> Result<f64, &'static str> {
    match entry {
        NumericEntry::Empty => Ok(0.0),
        NumericEntry::Invalid => Err(RATING_RANGE),
        NumericEntry::Value(value) => check_rating(value).map_or(Ok(value), Err),
    }
}

/// Blank descriptions are stored as absent.
fn description_value(raw: &str) -> Option<String> {
    (!raw.trim().is_empty()).then(|| raw.to_string())
}

fn keep<T>(errors: &mut FieldErrors, field: Field, result: Result<T, &str>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(message) => {
            errors.insert(field, message);
            None
        }
    }
}

fn present<'de, D>(deserializer: D) -> Result<Option<NumericEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    NumericEntry::deserialize(deserializer).map(Some)
}

fn present_category<'de, D>(deserializer: D) -> Result<Option<Option<i32>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[serde_as]
    #[derive(Deserialize)]
    struct Lenient(#[serde_as(as = "PickFirst<(_, NoneAsEmptyString)>")] Option<i32>);

    Lenient::deserialize(deserializer).map(|lenient| Some(lenient.0))
}

/// Raw edit form input. A key that is left out leaves the stored value alone;
/// a key that is present, even as `null` or `""`, is what the user left in
/// the box and goes through the same rules as on create.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ViewPointPatchDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub latitude: Option<NumericEntry>,
    #[serde(default, deserialize_with = "present")]
    pub longitude: Option<NumericEntry>,
    #[serde(default, deserialize_with = "present")]
    pub elevation: Option<NumericEntry>,
    #[serde(default, deserialize_with = "present_category")]
    pub category_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "present")]
    pub rating: Option<NumericEntry>,
    #[serde(default)]
    pub is_public: Option<bool>,
}

impl ViewPointPatchDraft {
    /// Checks the fields that are present and builds the update payload.
    pub fn validate(self) -> Result<ViewPointPatch, FieldErrors> {
        let mut errors = FieldErrors::default();

        if let Some(name) = &self.name {
            errors.note(Field::Name, check_name(name));
        }
        let latitude = self
            .latitude
            .and_then(|entry| keep(&mut errors, Field::Latitude, required_latitude(entry)));
        let longitude = self
            .longitude
            .and_then(|entry| keep(&mut errors, Field::Longitude, required_longitude(entry)));
        let elevation = self
            .elevation
            .and_then(|entry| keep(&mut errors, Field::Elevation, optional_elevation(entry)));
        let rating = self
            .rating
            .and_then(|entry| keep(&mut errors, Field::Rating, rating_value(entry)));

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ViewPointPatch {
            name: self.name,
            description: self
                .description
                .map(|description| description.as_deref().and_then(description_value)),
            latitude,
            longitude,
            elevation,
            category_id: self.category_id,
            rating,
            is_public: self.is_public,
        })
    }
}

pub fn validate_category(data: &CategoryFormData) -> FieldErrors {
    let mut errors = FieldErrors::default();
    errors.note(Field::Name, check_name(&data.name));
    errors
}

pub fn validate_category_patch(patch: &CategoryPatch) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if let Some(name) = &patch.name {
        errors.note(Field::Name, check_name(name));
    }
    errors
}

#[derive(Debug)]
pub enum SubmitError<E> {
    /// Validation failed; the handler was not called.
    Invalid(FieldErrors),
    /// The handler ran and failed. The form keeps what was typed.
    Rejected(E),
}

impl<E: fmt::Display> fmt::Display for SubmitError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Invalid(errors) => write!(f, "invalid form: {errors}"),
            SubmitError::Rejected(e) => write!(f, "submit failed: {e}"),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for SubmitError<E> {}

/// State of a create or edit form.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ViewPointForm {
    pub name: String,
    pub description: String,
    pub latitude: NumericEntry,
    pub longitude: NumericEntry,
    pub elevation: NumericEntry,
    pub category_id: Option<i32>,
    pub rating: NumericEntry,
    pub is_public: bool,
    errors: FieldErrors,
}

impl Default for ViewPointForm {
    fn default() -> Self {
        ViewPointForm::new()
    }
}

impl ViewPointForm {
    pub fn new() -> Self {
        ViewPointForm {
            name: String::new(),
            description: String::new(),
            latitude: NumericEntry::Empty,
            longitude: NumericEntry::Empty,
            elevation: NumericEntry::Empty,
            category_id: None,
            rating: NumericEntry::Value(0.0),
            is_public: true,
            errors: FieldErrors::default(),
        }
    }

    /// Initial values of the edit form.
    pub fn from_viewpoint(viewpoint: &ViewPoint) -> Self {
        ViewPointForm {
            name: viewpoint.name.clone(),
            description: viewpoint.description.clone().unwrap_or_default(),
            latitude: viewpoint.latitude.into(),
            longitude: viewpoint.longitude.into(),
            elevation: viewpoint.elevation.into(),
            category_id: viewpoint.category_id,
            rating: viewpoint.rating.into(),
            is_public: viewpoint.is_public,
            errors: FieldErrors::default(),
        }
    }

    pub fn from_draft(draft: ViewPointDraft) -> Self {
        ViewPointForm {
            name: draft.name,
            description: draft.description.unwrap_or_default(),
            latitude: draft.latitude,
            longitude: draft.longitude,
            elevation: draft.elevation,
            category_id: draft.category_id,
            rating: draft.rating,
            is_public: draft.is_public,
            errors: FieldErrors::default(),
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    /// Applies an edit to one input. The field's previous error goes away
    /// immediately; other fields keep theirs until the next submit.
    pub fn set(&mut self, field: Field, raw: &str) {
        match field {
            Field::Name => self.name = raw.to_string(),
            Field::Description => self.description = raw.to_string(),
            Field::Latitude => self.latitude = NumericEntry::parse(raw),
            Field::Longitude => self.longitude = NumericEntry::parse(raw),
            Field::Elevation => self.elevation = NumericEntry::parse(raw),
            Field::Category => self.category_id = raw.trim().parse().ok(),
            Field::Rating => self.rating = NumericEntry::parse(raw),
        }
        self.errors.clear(field);
    }

    pub fn set_public(&mut self, is_public: bool) {
        self.is_public = is_public;
    }

    /// Runs every rule from scratch without touching the stored errors.
    pub fn check(&self) -> Result<ViewPointFormData, FieldErrors> {
        let mut errors = FieldErrors::default();

        errors.note(Field::Name, check_name(&self.name));
        let latitude = keep(&mut errors, Field::Latitude, required_latitude(self.latitude));
        let longitude = keep(&mut errors, Field::Longitude, required_longitude(self.longitude));
        let elevation = keep(&mut errors, Field::Elevation, optional_elevation(self.elevation));
        let rating = keep(&mut errors, Field::Rating, rating_value(self.rating));

        match (latitude, longitude, elevation, rating) {
            (Some(latitude), Some(longitude), Some(elevation), Some(rating))
                if errors.is_empty() =>
            {
                Ok(ViewPointFormData {
                    name: self.name.clone(),
                    description: description_value(&self.description),
                    latitude,
                    longitude,
                    elevation,
                    category_id: self.category_id,
                    rating,
                    is_public: self.is_public,
                })
            }
            _ => Err(errors),
        }
    }

    /// Recomputes the error state and returns the payload when it is clean.
    pub fn validate(&mut self) -> Result<ViewPointFormData, FieldErrors> {
        let result = self.check();
        self.errors = match &result {
            Ok(_) => FieldErrors::default(),
            Err(errors) => errors.clone(),
        };
        result
    }

    /// Validates, then hands the payload to `handler`. The form does no I/O of
    /// its own.
    pub async fn submit<F, Fut, T, E>(&mut self, handler: F) -> Result<T, SubmitError<E>>
    where
        F: FnOnce(ViewPointFormData) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: fmt::Display,
    {
        let data = self.validate().map_err(SubmitError::Invalid)?;

        match handler(data).await {
            Ok(saved) => Ok(saved),
            Err(e) => {
                error!("Form submission error: {e}");
                Err(SubmitError::Rejected(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn valid_form() -> ViewPointForm {
        let mut form = ViewPointForm::new();
        form.set(Field::Name, "Trolltunga");
        form.set(Field::Latitude, "60.124");
        form.set(Field::Longitude, "6.74");
        form
    }

    #[test]
    fn test_valid_form_produces_payload() {
        let mut form = valid_form();
        form.set(Field::Elevation, "1180");
        form.set(Field::Category, "2");

        let data = form.validate().unwrap();
        assert_eq!(data.name, "Trolltunga");
        assert_eq!(data.latitude, 60.124);
        assert_eq!(data.elevation, Some(1180.0));
        assert_eq!(data.category_id, Some(2));
        assert_eq!(data.rating, 0.0);
        assert!(data.is_public);
        assert_eq!(data.description, None);
    }

    #[test]
    fn test_blank_name_is_required() {
        for name in ["", "   ", "\t\n"] {
            let mut form = valid_form();
            form.set(Field::Name, name);

            let errors = form.validate().unwrap_err();
            assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
            assert_eq!(errors.len(), 1);
        }
    }

    #[test]
    fn test_latitude_out_of_range_is_the_only_error() {
        let mut form = valid_form();
        form.set(Field::Latitude, "95");

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::Latitude]);
        assert_eq!(errors.get(Field::Latitude), Some(LATITUDE_RANGE));
    }

    #[test]
    fn test_coordinate_bounds_are_inclusive() {
        let mut form = valid_form();
        form.set(Field::Latitude, "-90");
        form.set(Field::Longitude, "180");
        assert!(form.validate().is_ok());

        form.set(Field::Longitude, "-180.0001");
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(Field::Longitude), Some(LONGITUDE_RANGE));
    }

    #[test]
    fn test_empty_coordinate_is_not_zero() {
        let mut form = valid_form();
        form.set(Field::Latitude, "");

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(Field::Latitude), Some(LATITUDE_REQUIRED));

        form.set(Field::Latitude, "0");
        assert_eq!(form.validate().unwrap().latitude, 0.0);
    }

    #[test]
    fn test_garbage_numbers_are_rejected() {
        let mut form = valid_form();
        form.set(Field::Longitude, "east");
        form.set(Field::Elevation, "tall");
        form.set(Field::Rating, "nan");

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(Field::Longitude), Some(LONGITUDE_RANGE));
        assert_eq!(errors.get(Field::Elevation), Some(ELEVATION_NUMBER));
        assert_eq!(errors.get(Field::Rating), Some(RATING_RANGE));
    }

    #[test]
    fn test_empty_rating_and_elevation_coerce() {
        let mut form = valid_form();
        form.set(Field::Rating, "");
        form.set(Field::Elevation, " ");

        let data = form.validate().unwrap();
        assert_eq!(data.rating, 0.0);
        assert_eq!(data.elevation, None);
    }

    #[test]
    fn test_rating_range() {
        let mut form = valid_form();
        form.set(Field::Rating, "5.1");
        assert_eq!(form.validate().unwrap_err().get(Field::Rating), Some(RATING_RANGE));

        form.set(Field::Rating, "4.9");
        assert_eq!(form.validate().unwrap().rating, 4.9);
    }

    #[test]
    fn test_editing_clears_only_that_field() {
        let mut form = ViewPointForm::new();
        form.set(Field::Latitude, "100");
        form.set(Field::Longitude, "200");
        assert!(form.validate().is_err());
        assert_eq!(form.errors().len(), 3);

        form.set(Field::Latitude, "101");
        assert_eq!(form.error(Field::Latitude), None);
        assert_eq!(form.error(Field::Longitude), Some(LONGITUDE_RANGE));
        assert_eq!(form.error(Field::Name), Some(NAME_REQUIRED));
    }

    #[test]
    fn test_checkbox_keeps_errors() {
        let mut form = ViewPointForm::new();
        let _ = form.validate();
        form.set_public(false);
        assert_eq!(form.error(Field::Name), Some(NAME_REQUIRED));
        assert!(!form.is_public);
    }

    #[test]
    fn test_validation_recomputes_from_scratch() {
        let mut form = ViewPointForm::new();
        form.set(Field::Latitude, "91");
        let _ = form.validate();
        assert!(form.error(Field::Latitude).is_some());

        form.name = "Fixed".to_string();
        form.latitude = NumericEntry::Value(10.0);
        form.longitude = NumericEntry::Value(10.0);
        assert!(form.validate().is_ok());
        assert!(form.errors().is_empty());
    }

    #[actix_web::test]
    async fn test_submit_skips_handler_when_invalid() {
        let called = Cell::new(false);
        let mut form = valid_form();
        form.set(Field::Name, " ");

        let result = form
            .submit(|_| async {
                called.set(true);
                Ok::<_, String>(())
            })
            .await;

        assert!(matches!(result, Err(SubmitError::Invalid(_))));
        assert!(!called.get());
        assert_eq!(form.error(Field::Name), Some(NAME_REQUIRED));
    }

    #[actix_web::test]
    async fn test_submit_passes_complete_payload() {
        let mut form = valid_form();
        form.set(Field::Description, "Rock ledge over the fjord");

        let saved = form
            .submit(|data| async move { Ok::<_, String>(data) })
            .await
            .unwrap();

        assert_eq!(saved.description.as_deref(), Some("Rock ledge over the fjord"));
        assert_eq!(saved.longitude, 6.74);
    }

    #[actix_web::test]
    async fn test_failed_submit_keeps_typed_values() {
        let mut form = valid_form();
        let before = form.clone();

        let result = form
            .submit(|_| async { Err::<(), _>("backend down".to_string()) })
            .await;

        assert!(matches!(result, Err(SubmitError::Rejected(ref e)) if e == "backend down"));
        assert_eq!(form, before);
    }

    #[test]
    fn test_draft_accepts_numbers_and_text() {
        let draft: ViewPointDraft = serde_json::from_value(serde_json::json!({
            "name": "Pier",
            "latitude": "12.5",
            "longitude": -3,
            "elevation": "",
            "category_id": "",
            "rating": null
        }))
        .unwrap();

        assert_eq!(draft.latitude, NumericEntry::Value(12.5));
        assert_eq!(draft.longitude, NumericEntry::Value(-3.0));
        assert_eq!(draft.elevation, NumericEntry::Empty);
        assert_eq!(draft.category_id, None);
        assert_eq!(draft.rating, NumericEntry::Empty);
        assert!(draft.is_public);

        let draft: ViewPointDraft =
            serde_json::from_value(serde_json::json!({ "category_id": "4" })).unwrap();
        assert_eq!(draft.category_id, Some(4));
    }

    fn patch_draft(value: serde_json::Value) -> ViewPointPatchDraft {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_patch_checks_present_fields_only() {
        let errors = patch_draft(serde_json::json!({ "latitude": -91 }))
            .validate()
            .unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::Latitude]);

        assert_eq!(
            patch_draft(serde_json::json!({})).validate().unwrap(),
            ViewPointPatch::default()
        );

        let errors = patch_draft(serde_json::json!({ "name": "" })).validate().unwrap_err();
        assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
    }

    #[test]
    fn test_patch_null_is_not_absent() {
        let draft = patch_draft(serde_json::json!({ "latitude": null, "elevation": null }));
        assert_eq!(draft.latitude, Some(NumericEntry::Empty));
        assert_eq!(draft.longitude, None);

        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.get(Field::Latitude), Some(LATITUDE_REQUIRED));
        assert_eq!(errors.len(), 1);

        let patch = patch_draft(serde_json::json!({ "elevation": "", "category_id": "" }))
            .validate()
            .unwrap();
        assert_eq!(patch.elevation, Some(None));
        assert_eq!(patch.category_id, Some(None));
    }

    #[test]
    fn test_patch_uses_create_rules() {
        let errors = patch_draft(serde_json::json!({
            "longitude": "east",
            "elevation": "tall",
            "rating": 7
        }))
        .validate()
        .unwrap_err();
        assert_eq!(errors.get(Field::Longitude), Some(LONGITUDE_RANGE));
        assert_eq!(errors.get(Field::Elevation), Some(ELEVATION_NUMBER));
        assert_eq!(errors.get(Field::Rating), Some(RATING_RANGE));

        let patch = patch_draft(serde_json::json!({
            "latitude": "45.5",
            "rating": "",
            "category_id": "3",
            "description": "   "
        }))
        .validate()
        .unwrap();
        assert_eq!(patch.latitude, Some(45.5));
        assert_eq!(patch.rating, Some(0.0));
        assert_eq!(patch.category_id, Some(Some(3)));
        assert_eq!(patch.description, Some(None));
    }

    #[test]
    fn test_category_name_required() {
        let data = CategoryFormData {
            name: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(validate_category(&data).get(Field::Name), Some(NAME_REQUIRED));
        assert!(validate_category_patch(&CategoryPatch::default()).is_empty());
    }

    #[test]
    fn test_errors_serialize_by_field_name() {
        let mut form = ViewPointForm::new();
        form.set(Field::Latitude, "1");
        form.set(Field::Longitude, "1");
        let errors = form.validate().unwrap_err();

        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            serde_json::json!({ "name": NAME_REQUIRED })
        );
    }
}
