//! Input validation functions
//!
//! The original client application trusted its form layer and performed no
//! validation in the core. These checks close that gap at the store and
//! mutator boundaries.

use chrono::NaiveDate;

/// Validate a client name
pub fn validate_client_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name cannot be empty".to_string());
    }
    if name.len() > 255 {
        return Err("Name too long".to_string());
    }
    Ok(())
}

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }
    if email.len() > 255 {
        return Err("Email too long".to_string());
    }
    let email_regex = regex_lite::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    if !email_regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

/// Validate a weight measurement (in kg)
pub fn validate_weight(weight: f64) -> Result<(), String> {
    if weight.is_nan() || weight.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight <= 0.0 {
        return Err("Weight must be positive".to_string());
    }
    if weight > 500.0 {
        return Err("Weight must be at most 500 kg".to_string());
    }
    Ok(())
}

/// Validate a training duration in minutes
pub fn validate_duration_minutes(minutes: u32) -> Result<(), String> {
    if minutes == 0 {
        return Err("Duration must be positive".to_string());
    }
    if minutes > 1440 {
        // 24 hours
        return Err("Duration cannot exceed 24 hours".to_string());
    }
    Ok(())
}

/// Validate a calorie value
pub fn validate_calories(calories: u32) -> Result<(), String> {
    if calories > 50_000 {
        return Err("Calorie value unreasonably high".to_string());
    }
    Ok(())
}

/// Validate a medication period
///
/// The end date, when present, must not be earlier than the start date.
pub fn validate_medication_period(
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
) -> Result<(), String> {
    if let Some(end) = end_date {
        if end < start_date {
            return Err("End date cannot be earlier than start date".to_string());
        }
    }
    Ok(())
}

/// Validate a birth date: must not be in the future
pub fn validate_birth_date(birth_date: NaiveDate, today: NaiveDate) -> Result<(), String> {
    if birth_date > today {
        return Err("Birth date cannot be in the future".to_string());
    }
    Ok(())
}
