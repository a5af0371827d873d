#[cfg(test)]
mod model_tests {
    use std::str::FromStr;

    use jiff::{SignedDuration, civil::date};

    use crate::{
        analytics::Completion,
        models::{Habit, HabitStats, HabitStatus, HabitTemplate, NewHabit, UpdateHabitRequest},
    };

    fn create_test_habit(status: HabitStatus) -> Habit {
        Habit {
            id: 123,
            content_id: 456,
            name: "Morning Run".to_string(),
            start: date(2030, 1, 7).at(6, 30, 0, 0),
            duration: SignedDuration::from_mins(45),
            status,
            description: Some("Around the park".to_string()),
            reflections: if status == HabitStatus::Done {
                Some("Legs felt heavy".to_string())
            } else {
                None
            },
        }
    }

    #[test]
    fn test_habit_end() {
        let habit = create_test_habit(HabitStatus::Upcoming);
        assert_eq!(habit.end(), date(2030, 1, 7).at(7, 15, 0, 0));
    }

    #[test]
    fn test_habit_display_upcoming() {
        let output = create_test_habit(HabitStatus::Upcoming).to_string();

        assert!(output.contains("### 123. Morning Run (UPCOMING)"));
        assert!(output.contains("- Start: 2030-01-07 06:30 (Mon)"));
        assert!(output.contains("- Duration: 00:45:00"));
        assert!(output.contains("- End: 2030-01-07 07:15 (Mon)"));
        assert!(output.contains("Around the park"));
        assert!(!output.contains("#### Reflections"));
    }

    #[test]
    fn test_habit_display_done_with_reflections() {
        let output = create_test_habit(HabitStatus::Done).to_string();

        assert!(output.contains("(DONE)"));
        assert!(output.contains("#### Reflections"));
        assert!(output.contains("Legs felt heavy"));
    }

    #[test]
    fn test_status_from_str_is_lenient() {
        assert_eq!(HabitStatus::from_str("done"), Ok(HabitStatus::Done));
        assert_eq!(
            HabitStatus::from_str("to be confirmed"),
            Ok(HabitStatus::ToBeConfirmed)
        );
        assert_eq!(
            HabitStatus::from_str("To-Be-Confirmed"),
            Ok(HabitStatus::ToBeConfirmed)
        );
        assert!(HabitStatus::from_str("later").is_err());
    }

    #[test]
    fn test_status_round_trips_through_storage_form() {
        for status in [
            HabitStatus::Ongoing,
            HabitStatus::Upcoming,
            HabitStatus::Active,
            HabitStatus::Done,
            HabitStatus::Dead,
            HabitStatus::Missed,
            HabitStatus::ToBeConfirmed,
            HabitStatus::Unknown,
        ] {
            assert_eq!(HabitStatus::from_str(status.as_str()), Ok(status));
        }
    }

    #[test]
    fn test_classify_boundaries() {
        let start = date(2030, 3, 1).at(9, 0, 0, 0);
        let duration = SignedDuration::from_hours(1);
        let end = date(2030, 3, 1).at(10, 0, 0, 0);

        // Window is half-open: start is ongoing, end is not
        assert_eq!(
            HabitStatus::classify(start, duration, start),
            HabitStatus::Ongoing
        );
        assert_eq!(
            HabitStatus::classify(start, duration, end),
            HabitStatus::ToBeConfirmed
        );

        // Exactly one day after the end is still confirmable
        let day_later = date(2030, 3, 2).at(10, 0, 0, 0);
        assert_eq!(
            HabitStatus::classify(start, duration, day_later),
            HabitStatus::ToBeConfirmed
        );
        assert_eq!(
            HabitStatus::classify(start, duration, date(2030, 3, 2).at(10, 0, 1, 0)),
            HabitStatus::Missed
        );
    }

    #[test]
    fn test_time_driven_statuses() {
        assert!(HabitStatus::Upcoming.is_time_driven());
        assert!(HabitStatus::ToBeConfirmed.is_time_driven());
        assert!(!HabitStatus::Done.is_time_driven());
        assert!(!HabitStatus::Missed.is_time_driven());
    }

    #[test]
    fn test_template_into_new_habit() {
        let template = HabitTemplate {
            name: "Read".to_string(),
            start: date(2030, 4, 1).at(21, 0, 0, 0),
            duration: SignedDuration::from_mins(30),
            description: None,
        };
        let new: NewHabit = template.clone().into();
        assert_eq!(new, template.instance_at(template.start));
        assert_eq!(new.status, HabitStatus::Upcoming);
    }

    #[test]
    fn test_update_request_describe_changes() {
        let request = UpdateHabitRequest {
            name: Some("Evening Run".to_string()),
            status: Some(HabitStatus::Done),
            reflections: Some("Good pace".to_string()),
            ..Default::default()
        };
        assert_eq!(
            request.describe_changes(),
            vec![
                "Renamed to 'Evening Run'".to_string(),
                "Changed status to DONE".to_string(),
                "Updated reflections".to_string(),
            ]
        );
        assert!(!request.is_empty());
        assert!(UpdateHabitRequest::default().is_empty());
    }

    #[test]
    fn test_update_request_try_from_params() {
        use crate::params::UpdateHabit;

        let params = UpdateHabit {
            id: 1,
            start: Some("2030-05-01, 07:00".to_string()),
            duration: Some("00:30:00".to_string()),
            ..Default::default()
        };
        let request: UpdateHabitRequest = params.try_into().unwrap();
        assert_eq!(request.start, Some(date(2030, 5, 1).at(7, 0, 0, 0)));
        assert_eq!(request.duration, Some(SignedDuration::from_mins(30)));

        let params = UpdateHabit {
            id: 1,
            name: Some("x".to_string()),
            ..Default::default()
        };
        let result: Result<UpdateHabitRequest, _> = params.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_habit_stats_from_habits() {
        let statuses = [
            HabitStatus::Done,
            HabitStatus::Done,
            HabitStatus::Missed,
            HabitStatus::Done,
            HabitStatus::Upcoming,
        ];
        let habits: Vec<Habit> = statuses
            .iter()
            .enumerate()
            .map(|(i, status)| Habit {
                id: i as u64 + 1,
                ..create_test_habit(*status)
            })
            .collect();

        let stats = HabitStats::from_habits("Morning Run", &habits);
        assert_eq!(stats.sessions, 5);
        assert_eq!(stats.longest_streak, 2);
        assert_eq!(stats.shortest_streak, 1);
        assert_eq!(stats.latest_streaks, vec![2, 1]);
        assert_eq!(stats.completion, Completion { done: 3, missed: 1 });
        assert_eq!(stats.completion_rate(), Some(75.0));

        let output = stats.to_string();
        assert!(output.contains("## Morning Run"));
        assert!(output.contains("- Latest streaks: 2, 1"));
        assert!(output.contains("- Completion rate: 75.0% (done 3, missed 1)"));
    }

    #[test]
    fn test_habit_stats_without_history() {
        let stats = HabitStats::from_habits("Nothing", &[]);
        assert_eq!(stats.completion_rate(), None);
        let output = stats.to_string();
        assert!(output.contains("- Latest streaks: none"));
        assert!(output.contains("no finished sessions yet"));
    }
}
