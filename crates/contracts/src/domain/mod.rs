pub mod a001_absence;
pub mod a002_grade;
pub mod a003_message;
pub mod a004_bulletin;
pub mod a005_calendar_event;
pub mod a006_document;
pub mod a007_homework;
pub mod common;
