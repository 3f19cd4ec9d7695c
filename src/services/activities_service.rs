use indexmap::IndexMap;

use crate::database::ActivityDirectory;
use crate::error::AppError;
use crate::models::Activity;

/// Snapshot of every activity, in directory order.
pub fn list_activities(directory: &ActivityDirectory) -> IndexMap<String, Activity> {
    directory.list_activities()
}

/// Appends `email` to the activity's participants.
///
/// Capacity is not checked: `max_participants` is informational only.
pub fn sign_up(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<String, AppError> {
    directory.update_activity(activity_name, |activity| {
        if activity.has_participant(email) {
            return Err(AppError::AlreadySignedUp);
        }
        activity.participants.push(email.to_string());
        Ok(format!("Signed up {} for {}", email, activity_name))
    })
}

pub fn remove_participant(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<String, AppError> {
    directory.update_activity(activity_name, |activity| {
        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            return Err(AppError::ParticipantNotFound);
        };
        activity.participants.remove(pos);
        Ok(format!("Removed {} from {}", email, activity_name))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn participants(dir: &ActivityDirectory, name: &str) -> Vec<String> {
        dir.load_activity(name).unwrap().participants
    }

    #[test]
    fn sign_up_appends_and_confirms() {
        let dir = ActivityDirectory::seeded();
        let msg = sign_up(&dir, "Chess Club", "new@mergington.edu").unwrap();
        assert_eq!(msg, "Signed up new@mergington.edu for Chess Club");
        assert_eq!(
            participants(&dir, "Chess Club"),
            vec![
                "michael@mergington.edu",
                "daniel@mergington.edu",
                "new@mergington.edu"
            ]
        );
    }

    #[test]
    fn duplicate_sign_up_is_rejected_once_recorded() {
        let dir = ActivityDirectory::seeded();
        sign_up(&dir, "Soccer", "dup@mergington.edu").unwrap();
        let err = sign_up(&dir, "Soccer", "dup@mergington.edu").unwrap_err();
        assert_eq!(err, AppError::AlreadySignedUp);
        let count = participants(&dir, "Soccer")
            .iter()
            .filter(|p| p.as_str() == "dup@mergington.edu")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn unknown_activity_fails_before_email_checks() {
        let dir = ActivityDirectory::seeded();
        assert_eq!(
            sign_up(&dir, "NoSuchActivity", "michael@mergington.edu"),
            Err(AppError::ActivityNotFound)
        );
        assert_eq!(
            remove_participant(&dir, "NoSuchActivity", "not-there@mergington.edu"),
            Err(AppError::ActivityNotFound)
        );
    }

    #[test]
    fn sign_up_ignores_capacity() {
        let dir = ActivityDirectory::seeded();
        let max = dir.load_activity("Math Olympiad").unwrap().max_participants;
        for i in 0..max + 3 {
            sign_up(&dir, "Math Olympiad", &format!("student{}@mergington.edu", i)).unwrap();
        }
        assert!(participants(&dir, "Math Olympiad").len() > max as usize);
    }

    #[test]
    fn remove_missing_participant_is_not_found() {
        let dir = ActivityDirectory::seeded();
        assert_eq!(
            remove_participant(&dir, "Gym Class", "not-a-participant@example.com"),
            Err(AppError::ParticipantNotFound)
        );
    }

    #[test]
    fn sign_up_then_remove_restores_list() {
        let dir = ActivityDirectory::seeded();
        let before = participants(&dir, "Drama Club");
        sign_up(&dir, "Drama Club", "temp@mergington.edu").unwrap();
        let msg = remove_participant(&dir, "Drama Club", "temp@mergington.edu").unwrap();
        assert_eq!(msg, "Removed temp@mergington.edu from Drama Club");
        assert_eq!(participants(&dir, "Drama Club"), before);
    }

    #[test]
    fn remove_keeps_order_of_others() {
        let dir = ActivityDirectory::seeded();
        sign_up(&dir, "Art Club", "b@mergington.edu").unwrap();
        sign_up(&dir, "Art Club", "c@mergington.edu").unwrap();
        remove_participant(&dir, "Art Club", "b@mergington.edu").unwrap();
        assert_eq!(
            participants(&dir, "Art Club"),
            vec!["mia@mergington.edu", "c@mergington.edu"]
        );
    }

    #[test]
    fn concurrent_sign_ups_of_same_email_record_it_once() {
        let dir = std::sync::Arc::new(ActivityDirectory::seeded());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let dir = dir.clone();
                std::thread::spawn(move || sign_up(&dir, "Basketball", "race@mergington.edu"))
            })
            .collect();
        let ok = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(Result::is_ok)
            .count();
        assert_eq!(ok, 1);
        let count = participants(&dir, "Basketball")
            .iter()
            .filter(|p| p.as_str() == "race@mergington.edu")
            .count();
        assert_eq!(count, 1);
    }
}
