use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::modules::blog::application::domain::entities::BlogPost;
use crate::modules::course::application::domain::entities::{Course, CourseLevel};
use crate::modules::job::application::domain::entities::{JobPosting, JobSector, JobType};
use crate::shared::content::PublicationStatus;

pub fn sample_blog_post() -> BlogPost {
    let now = Utc::now();
    BlogPost {
        id: Uuid::new_v4(),
        title: "Hello Rust".to_string(),
        content: "Long body".to_string(),
        excerpt: "Short intro".to_string(),
        author: "Ada".to_string(),
        category: "Engineering".to_string(),
        tags: vec!["rust".to_string(), "web".to_string()],
        status: PublicationStatus::Published,
        thumbnail: "https://cdn.example.com/t.png".to_string(),
        read_time: "5 min".to_string(),
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_course() -> Course {
    let now = Utc::now();
    Course {
        id: Uuid::new_v4(),
        title: "Rust for Beginners".to_string(),
        description: "Start here".to_string(),
        content: "Week 1".to_string(),
        category: "Programming".to_string(),
        price: 49.5,
        duration: "6 weeks".to_string(),
        level: CourseLevel::Beginner,
        status: PublicationStatus::Published,
        image: "https://cdn.example.com/c.png".to_string(),
        modules: "Ownership, Traits".to_string(),
        your_learning: "Write safe code".to_string(),
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_job() -> JobPosting {
    let now = Utc::now();
    JobPosting {
        id: Uuid::new_v4(),
        title: "Backend Engineer".to_string(),
        company: "Acme".to_string(),
        location: "Jakarta".to_string(),
        salary: 12000.0,
        job_type: JobType::FullTime,
        sector: JobSector::Private,
        apply_start_date: now - Duration::days(1),
        apply_end_date: now + Duration::days(30),
        description: "Build APIs".to_string(),
        eligibility: "2 years experience".to_string(),
        status: PublicationStatus::Published,
        created_at: now,
        updated_at: now,
    }
}
