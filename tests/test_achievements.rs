use std::fs;

use space_survival::achievements::*;
use space_survival::error::AchievementError;
use space_survival::persistence::{AchievementFile, AchievementLog, MemoryAchievementFile};

fn manager() -> AchievementManager<MemoryAchievementFile> {
    let mut m = AchievementManager::new(MemoryAchievementFile::new());
    m.add_achievement(Achievement::new("Survivor", "Survive for 2 minutes"))
        .unwrap();
    m.add_achievement(Achievement::new("Sharp Shooter", "Achieve 99% shot accuracy"))
        .unwrap();
    m
}

// ── Tiers ─────────────────────────────────────────────────────────────────────

#[test]
fn tier_boundaries() {
    assert_eq!(Tier::from_progress(0.0), Tier::Novice);
    assert_eq!(Tier::from_progress(0.4999), Tier::Novice);
    assert_eq!(Tier::from_progress(0.5), Tier::Expert);
    assert_eq!(Tier::from_progress(0.998), Tier::Expert);
    assert_eq!(Tier::from_progress(0.999), Tier::Master);
    assert_eq!(Tier::from_progress(0.9991), Tier::Master);
    assert_eq!(Tier::from_progress(1.0), Tier::Master);
}

#[test]
fn tier_names() {
    assert_eq!(Tier::Novice.to_string(), "Novice");
    assert_eq!(Tier::Expert.to_string(), "Expert");
    assert_eq!(Tier::Master.to_string(), "Master");
}

// ── Achievement ───────────────────────────────────────────────────────────────

#[test]
fn new_achievement_starts_at_zero() {
    let a = Achievement::new("Survivor", "Survive for 2 minutes");
    assert_eq!(a.name(), "Survivor");
    assert_eq!(a.description(), "Survive for 2 minutes");
    assert_eq!(a.progress(), 0.0);
    assert_eq!(a.tier(), Tier::Novice);
    assert!(!a.is_mastered());
}

#[test]
fn set_progress_accepts_unit_interval() {
    let mut a = Achievement::new("A", "a");
    a.set_progress(0.5).unwrap();
    assert_eq!(a.tier(), Tier::Expert);
    a.set_progress(1.0).unwrap();
    assert!(a.is_mastered());
    assert_eq!(a.mastery_entry(), "A: Mastered");
}

#[test]
fn set_progress_rejects_out_of_range() {
    let mut a = Achievement::new("A", "a");
    a.set_progress(0.3).unwrap();
    for bad in [-0.1, 1.0001, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            a.set_progress(bad),
            Err(AchievementError::InvalidProgress(_))
        ));
    }
    assert_eq!(a.progress(), 0.3);
}

// ── Manager ───────────────────────────────────────────────────────────────────

#[test]
fn duplicate_registration_rejected() {
    let mut m = manager();
    let err = m
        .add_achievement(Achievement::new("Survivor", "again"))
        .unwrap_err();
    assert_eq!(err, AchievementError::AlreadyRegistered("Survivor".to_string()));
    assert_eq!(m.achievements().len(), 2);
}

#[test]
fn update_unknown_name_rejected() {
    let mut m = manager();
    let err = m.update_achievement("Pacifist", 0.5).unwrap_err();
    assert_eq!(err, AchievementError::NotFound("Pacifist".to_string()));
}

#[test]
fn update_rounds_to_three_decimals() {
    let mut m = manager();
    m.update_achievement("Survivor", 0.12345).unwrap();
    assert_eq!(m.get("Survivor").unwrap().progress(), 0.123);

    m.update_achievement("Survivor", 0.9991).unwrap();
    let survivor = m.get("Survivor").unwrap();
    assert_eq!(survivor.progress(), 0.999);
    assert_eq!(survivor.tier(), Tier::Master);
    assert!(!survivor.is_mastered());
}

#[test]
fn update_out_of_range_rejected() {
    let mut m = manager();
    assert!(m.update_achievement("Survivor", 1.5).is_err());
    assert_eq!(m.get("Survivor").unwrap().progress(), 0.0);
}

#[test]
fn achievements_keep_registration_order() {
    let m = manager();
    let names: Vec<&str> = m.achievements().iter().map(|a| a.name()).collect();
    assert_eq!(names, vec!["Survivor", "Sharp Shooter"]);
}

// ── log_mastered ──────────────────────────────────────────────────────────────

#[test]
fn only_mastered_achievements_are_logged() {
    let mut m = manager();
    m.update_achievement("Survivor", 1.0).unwrap();
    m.update_achievement("Sharp Shooter", 0.7).unwrap();
    m.log_mastered();
    assert_eq!(m.file().read(), vec!["Survivor: Mastered".to_string()]);
}

#[test]
fn mastery_logged_once() {
    let mut m = manager();
    m.update_achievement("Survivor", 1.0).unwrap();
    m.log_mastered();
    m.log_mastered();
    m.update_achievement("Sharp Shooter", 1.0).unwrap();
    m.log_mastered();
    assert_eq!(
        m.file().read(),
        vec![
            "Survivor: Mastered".to_string(),
            "Sharp Shooter: Mastered".to_string()
        ]
    );
}

// ── File-backed log ───────────────────────────────────────────────────────────

#[test]
fn file_log_appends_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("achievements.log");
    let mut log = AchievementLog::new(&path);

    assert!(log.read().is_empty());
    log.save("Survivor: Mastered");
    log.save("Sharp Shooter: Mastered");

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Survivor: Mastered\nSharp Shooter: Mastered\n"
    );
    assert_eq!(log.read().len(), 2);
}

#[test]
fn file_log_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("achievements.log");

    let mut m = AchievementManager::new(AchievementLog::new(&path));
    m.add_achievement(Achievement::new("Survivor", "s")).unwrap();
    m.update_achievement("Survivor", 1.0).unwrap();
    m.log_mastered();

    // A new session reads the existing entry and does not repeat it.
    let mut m = AchievementManager::new(AchievementLog::new(&path));
    m.add_achievement(Achievement::new("Survivor", "s")).unwrap();
    m.update_achievement("Survivor", 1.0).unwrap();
    m.log_mastered();

    assert_eq!(fs::read_to_string(&path).unwrap(), "Survivor: Mastered\n");
}

#[test]
fn unwritable_log_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be opened as a file for append or read.
    let mut log = AchievementLog::new(dir.path());
    log.save("Survivor: Mastered");
    assert!(log.read().is_empty());
}

#[test]
fn default_location() {
    let log = AchievementLog::default();
    assert_eq!(log.path().to_str(), Some("achievements.log"));
}
