use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// How a course is delivered.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub enum Mode {
    Online,
    Offline,
}

/// An exam-preparation course offered by the mentor.
///
/// Serialized with camelCase keys; the optional images serialize as `null`
/// rather than being omitted.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i32,
    #[schema(example = "JEE Advanced")]
    pub exam_name: String,
    #[schema(example = "2 Years")]
    pub duration: String,
    pub mode: Mode,
    pub learning_outcome: String,
    #[schema(example = "India")]
    pub country: String,
    pub exam_type: String,
    pub academic_level: String,
    pub overview: String,
    pub who_it_is_for: String,
    pub teaching_approach: String,
    pub outcomes: String,
    pub counselling_info: String,
    pub banner_image: Option<String>,
    pub thumbnail_image: Option<String>,
}

impl Course {
    /// Name of the first required text field left empty, if any.
    pub fn blank_required_field(&self) -> Option<&'static str> {
        super::first_blank(&[
            ("examName", self.exam_name.as_str()),
            ("duration", self.duration.as_str()),
            ("learningOutcome", self.learning_outcome.as_str()),
            ("country", self.country.as_str()),
            ("examType", self.exam_type.as_str()),
            ("academicLevel", self.academic_level.as_str()),
            ("overview", self.overview.as_str()),
            ("whoItIsFor", self.who_it_is_for.as_str()),
            ("teachingApproach", self.teaching_approach.as_str()),
            ("outcomes", self.outcomes.as_str()),
            ("counsellingInfo", self.counselling_info.as_str()),
        ])
    }
}
