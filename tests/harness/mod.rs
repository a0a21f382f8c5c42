pub mod recording_notifier;
