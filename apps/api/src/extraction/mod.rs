// Document text extraction for uploaded resumes. Feeds plain text into the ranking core.

pub mod pdf;
