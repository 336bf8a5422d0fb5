use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A physics topic explainer shown on the fields page.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PhysicsField {
    pub id: i32,
    #[schema(example = "Mechanics")]
    pub name: String,
    pub explanation: String,
    pub exam_relevance: String,
    pub real_world_apps: String,
    pub teaching_approach: String,
    /// Ordered, may be empty.
    pub youtube_links: Vec<String>,
    /// Course ids kept as strings. Not checked against the course list.
    pub related_course_ids: Option<Vec<String>>,
}

impl PhysicsField {
    pub fn blank_required_field(&self) -> Option<&'static str> {
        super::first_blank(&[
            ("name", self.name.as_str()),
            ("explanation", self.explanation.as_str()),
            ("examRelevance", self.exam_relevance.as_str()),
            ("realWorldApps", self.real_world_apps.as_str()),
            ("teachingApproach", self.teaching_approach.as_str()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_related_courses_serializes_as_null() {
        let field = PhysicsField {
            id: 3,
            name: "Optics".into(),
            explanation: "Light and lenses.".into(),
            exam_relevance: "Moderate.".into(),
            real_world_apps: "Cameras.".into(),
            teaching_approach: "Ray diagrams.".into(),
            youtube_links: vec![],
            related_course_ids: None,
        };

        let value = serde_json::to_value(&field).unwrap();
        assert_eq!(value["youtubeLinks"], json!([]));
        assert!(value["relatedCourseIds"].is_null());
        assert_eq!(value["realWorldApps"], json!("Cameras."));
    }

    #[test]
    fn youtube_links_are_required_on_input() {
        let parsed = serde_json::from_value::<PhysicsField>(json!({
            "id": 1,
            "name": "Mechanics",
            "explanation": "x",
            "examRelevance": "x",
            "realWorldApps": "x",
            "teachingApproach": "x"
        }));
        assert!(parsed.is_err());
    }
}
