//! Built-in portfolio dataset.
//!
//! This is the one module to edit when making the page yours. Every value
//! below is rendered verbatim by the site and the CLI; the list shapes are
//! fixed at build time and nothing here changes at runtime.

use crate::types::*;

/// Build the complete dataset. Cheap enough to call freely, but surfaces are
/// expected to call it once at startup and hold on to the result.
pub fn portfolio() -> Portfolio {
    Portfolio {
        profile: profile(),
        skills: skills(),
        projects: projects(),
        experience: experience(),
    }
}

fn profile() -> Profile {
    Profile {
        name: "Shouvik Seth".into(),
        tagline: "Full-stack \u{2022} AI/QA Automation \u{2022} Robotics".into(),
        location: "New Brunswick, NJ".into(),
        summary: "M.S. CS (AI) @ Rutgers. 3+ years building AI-driven QA platforms, chatbot \
                  evaluation systems, and automation at Infosys. I love turning ideas into \
                  reliable, user-friendly tools."
            .into(),
        email: "shouvikseth372@gmail.com".into(),
        resume_url: "/resume_Shouvik_Seth.pdf".into(),
        github: "https://github.com/shouvikseth".into(),
        linkedin: "https://www.linkedin.com/in/shouvik-seth-94914b227/".into(),
    }
}

fn skills() -> Vec<Skill> {
    vec![
        skill("Java", 5, SkillGroup::Languages),
        skill("Python", 5, SkillGroup::Languages),
        skill("JavaScript/TypeScript", 4, SkillGroup::Languages),
        skill("SQL", 4, SkillGroup::Languages),
        skill("Django", 4, SkillGroup::Frameworks),
        skill("Angular", 4, SkillGroup::Frameworks),
        skill("Node.js", 4, SkillGroup::Frameworks),
        skill("Spring Boot", 3, SkillGroup::Frameworks),
        skill("TensorFlow / PyTorch", 3, SkillGroup::AiMl),
        skill("OpenCV", 3, SkillGroup::AiMl),
        skill("ROS / LIDAR", 4, SkillGroup::Robotics),
        skill("Selenium / QA", 5, SkillGroup::Automation),
    ]
}

fn projects() -> Vec<Project> {
    vec![
        project(
            "AI Assurance Platform (Infosys)",
            "Enterprise QA automation with LLM-assisted test generation, DOM extraction, \
             and CI pipelines.",
            &[Tag::Ai, Tag::Automation, Tag::Backend],
        ),
        project(
            "Chatbot Evaluation System",
            "Conversation relevancy, completeness, and retention metrics with DeepEval + Botpress.",
            &[Tag::Ai, Tag::Nlp, Tag::FullStack],
        ),
        project(
            "Visual-Inertial Odometry (VIO)",
            "Monocular/stereo + IMU odometry on KITTI/EuRoC with filtering and robust tracking.",
            &[Tag::Robotics, Tag::Perception],
        ),
        project(
            "Space Rat Pursuit",
            "Probabilistic pursuit with knowledge updates and entropy tracking vs baseline \
             strategies.",
            &[Tag::Ai, Tag::Search],
        ),
        project(
            "Semi-External MST",
            "O(n) RAM MST for dense graphs (\u{398}(n\u{b2}) edges) \u{2014} I/O-aware \
             algorithm design.",
            &[Tag::Algorithms],
        ),
        project(
            "ROS/LIDAR Security Bot",
            "Room mapping + patrol behaviors using ROS Noetic, Arduino, and 2D LIDAR.",
            &[Tag::Robotics],
        ),
    ]
}

fn experience() -> Vec<Experience> {
    vec![
        Experience {
            role: "Software Test Analyst \u{2192} Lead Developer".into(),
            org: "Infosys India Pvt. Ltd.".into(),
            period: "Sep 2021 \u{2014} Dec 2024".into(),
            highlights: vec![
                "Built AI-driven QA platforms and chatbot evaluation systems".into(),
                "Led 4-6 engineers; delivered market-ready automation tools".into(),
                "Integrated Selenium pipelines, DOM parsers, and CI/CD".into(),
            ],
        },
        Experience {
            role: "M.S. in Computer Science (AI)".into(),
            org: "Rutgers University-New Brunswick".into(),
            period: "Jan 2025 \u{2014} Present".into(),
            highlights: vec![
                "Courses: Foundations of CS, Advanced Algorithms, Robotics/AI Planning".into(),
                "Projects: VIO, Space Rat, Semi-External MST".into(),
            ],
        },
    ]
}

// ---------------------------------------------------------------------------
// Construction helpers
// ---------------------------------------------------------------------------

fn skill(name: &str, level: u8, group: SkillGroup) -> Skill {
    Skill { name: name.into(), level, group }
}

fn project(title: &str, blurb: &str, tags: &[Tag]) -> Project {
    Project { title: title.into(), blurb: blurb.into(), tags: tags.to_vec() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn project_titles_are_unique() {
        let projects = projects();
        let titles: HashSet<&str> = projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles.len(), projects.len(), "duplicate project titles break card identity");
    }

    #[test]
    fn every_project_carries_at_least_one_tag() {
        for p in projects() {
            assert!(!p.tags.is_empty(), "project '{}' has no tags", p.title);
        }
    }

    #[test]
    fn skill_levels_stay_on_the_five_point_scale() {
        for s in skills() {
            assert!((1..=5).contains(&s.level), "skill '{}' has level {}", s.name, s.level);
        }
    }

    #[test]
    fn experience_entries_are_never_blank() {
        for e in experience() {
            assert!(!e.highlights.is_empty(), "entry '{}' has no highlights", e.role);
        }
    }
}
