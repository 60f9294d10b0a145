pub mod job_postings;
