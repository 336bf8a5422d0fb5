//! Seed content loaded into the store at process start.

use crate::domain::model::{Course, Mode, PhysicsField};
use std::collections::HashSet;

fn text(s: &str) -> String {
    s.to_string()
}

fn unsplash(photo: &str, width: u32) -> Option<String> {
    Some(format!(
        "https://images.unsplash.com/{}?auto=format&fit=crop&q=80&w={}",
        photo, width
    ))
}

/// The shipped course catalogue, ids 1..=3.
pub fn courses() -> Vec<Course> {
    vec![
        Course {
            id: 1,
            exam_name: text("JEE Advanced"),
            duration: text("2 Years"),
            mode: Mode::Offline,
            learning_outcome: text("Master complex problem-solving for IIT admissions."),
            country: text("India"),
            exam_type: text("Engineering"),
            academic_level: text("High School"),
            overview: text("The most prestigious engineering entrance exam in India."),
            who_it_is_for: text("Aspiring engineers aiming for IIT admission."),
            teaching_approach: text("Deep conceptual understanding and rigorous practice."),
            outcomes: text("Advanced problem-solving skills for JEE Advanced."),
            counselling_info: text("Complete JoSAA guidance and institute selection support."),
            banner_image: unsplash("photo-1562774053-701939374585", 2000),
            thumbnail_image: unsplash("photo-1434030216411-0b793f4b4173", 800),
        },
        Course {
            id: 2,
            exam_name: text("NEET"),
            duration: text("2 Years"),
            mode: Mode::Online,
            learning_outcome: text("Score 700+ in medical entrance with clear concepts."),
            country: text("India"),
            exam_type: text("Medical"),
            academic_level: text("High School"),
            overview: text("Common entrance for medical colleges in India."),
            who_it_is_for: text("Medical aspirants seeking admission to top MBBS colleges."),
            teaching_approach: text("NCERT-centric approach with speed-building techniques."),
            outcomes: text("Exceptional speed and accuracy in Biology, Chemistry, and Physics."),
            counselling_info: text("MCC and state-level counselling guidance."),
            banner_image: unsplash("photo-1576091160550-2173dba999ef", 2000),
            thumbnail_image: unsplash("photo-1576091160550-2173dba999ef", 800),
        },
        Course {
            id: 3,
            exam_name: text("A-Levels Physics"),
            duration: text("1 Year"),
            mode: Mode::Online,
            learning_outcome: text("Excel in UK board exams with deep theoretical clarity."),
            country: text("UK"),
            exam_type: text("Boards"),
            academic_level: text("High School"),
            overview: text("The standard high school qualification in the UK."),
            who_it_is_for: text("Students preparing for UK university admissions."),
            teaching_approach: text("Focus on application-based questions and practical skills."),
            outcomes: text("Deep understanding of A-Level Physics syllabus and high exam scores."),
            counselling_info: text("UCAS application support and personal statement review."),
            banner_image: unsplash("photo-1532094349884-543bc11b234d", 2000),
            thumbnail_image: unsplash("photo-1523050335102-c3250c82232c", 800),
        },
    ]
}

/// The shipped topic explainers, ids 1..=2.
pub fn physics_fields() -> Vec<PhysicsField> {
    vec![
        PhysicsField {
            id: 1,
            name: text("Mechanics"),
            explanation: text(
                "The study of motion and its causes. Think of it as the foundation of how things move!",
            ),
            exam_relevance: text("Crucial for all competitive exams (JEE, NEET, AP Physics)."),
            real_world_apps: text("Car safety, sports, bridge building, and space flight."),
            teaching_approach: text("Using real-world demonstrations and Newton's laws."),
            youtube_links: vec![text("https://youtube.com/sample1")],
            related_course_ids: Some(vec![text("1"), text("3")]),
        },
        PhysicsField {
            id: 2,
            name: text("Electromagnetism"),
            explanation: text("How electricity and magnetism work together to power our world."),
            exam_relevance: text("High weightage in advanced physics courses."),
            real_world_apps: text("Smartphones, MRI machines, and power grids."),
            teaching_approach: text("Visualizing fields using interactive simulations."),
            youtube_links: vec![text("https://youtube.com/sample2")],
            related_course_ids: Some(vec![text("1"), text("2")]),
        },
    ]
}

/// Lists `(field id, reference)` pairs whose course reference does not name
/// an existing course. References are never enforced; this is for reporting.
pub fn unresolved_course_refs(
    courses: &[Course],
    fields: &[PhysicsField],
) -> Vec<(i32, String)> {
    let known: HashSet<i32> = courses.iter().map(|c| c.id).collect();
    let mut dangling = Vec::new();

    for field in fields {
        for reference in field.related_course_ids.iter().flatten() {
            let resolves = reference
                .trim()
                .parse::<i32>()
                .map(|id| known.contains(&id))
                .unwrap_or(false);
            if !resolves {
                dangling.push((field.id, reference.clone()));
            }
        }
    }

    dangling
}
