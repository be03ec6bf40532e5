use super::support::WorkspaceFixture;
use anyhow::Result;
use footprintbase::accounts::AccountStore;
use footprintbase::history::{summarize, HistoryStore, Trend};
use footprintbase::scoring::{
    score_with_rng, DietType, FootprintCategory, HomeSize, RecyclingHabits, SurveyRecord,
    TransportMode, BAD_TIPS, GOOD_TIPS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn heavy_survey() -> SurveyRecord {
    SurveyRecord {
        transport_mode: TransportMode::Car,
        weekly_distance_km: 100.0,
        electricity_bill: 100.0,
        diet_type: DietType::MeatHeavy,
        trees_planted: 0,
        recycling_habits: RecyclingHabits::Never,
        home_size: HomeSize::Medium,
        flights_per_year: 2,
    }
}

fn light_survey() -> SurveyRecord {
    SurveyRecord {
        transport_mode: TransportMode::Bicycle,
        weekly_distance_km: 40.0,
        electricity_bill: 30.0,
        diet_type: DietType::Vegan,
        trees_planted: 5,
        recycling_habits: RecyclingHabits::Always,
        home_size: HomeSize::Small,
        flights_per_year: 0,
    }
}

#[test]
fn score_append_and_summarize_over_file_storage() -> Result<()> {
    let fixture = WorkspaceFixture::new();
    let mut rng = StdRng::seed_from_u64(11);

    let mut accounts = AccountStore::new(fixture.storage());
    let user = accounts.register("Ada", "ada@example.com", "pw")?;
    let user_id = user.id.to_string();

    let mut history = HistoryStore::new(fixture.storage());

    let first = score_with_rng(&heavy_survey(), &mut rng);
    assert_eq!(first.category, FootprintCategory::Bad);
    assert!(BAD_TIPS.contains(&first.tip.as_str()));
    history.append(&user_id, first.clone(), heavy_survey())?;

    let second = score_with_rng(&light_survey(), &mut rng);
    assert_eq!(second.category, FootprintCategory::Good);
    assert!(GOOD_TIPS.contains(&second.tip.as_str()));
    history.append(&user_id, second.clone(), light_survey())?;

    // Fresh store over the same directory sees the persisted log.
    let reread = HistoryStore::new(fixture.storage());
    let log = reread.read_all(&user_id)?;
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].result, second);
    assert_eq!(log[1].result, first);
    assert_eq!(log[0].data, light_survey());

    let summary = summarize(&log);
    assert_eq!(summary.trend, Some(Trend::Improving));
    assert_eq!(summary.good_count, 1);
    let expected_average = (first.total_score + second.total_score) / 2.0;
    assert!((summary.average_score - expected_average).abs() < 1e-9);
    assert_eq!(summary.latest.unwrap().id, log[0].id);
    Ok(())
}

// The CLI score path: an unseen --user email gets an account on the fly,
// then the appended log feeds the summary lines.
#[test]
fn scoring_an_unseen_email_registers_on_first_sight() -> Result<()> {
    let fixture = WorkspaceFixture::new();
    let mut rng = StdRng::seed_from_u64(14);

    let mut accounts = AccountStore::new(fixture.storage());
    assert!(accounts.find_by_email("new@example.com")?.is_none());
    let user = accounts.find_or_register("new@example.com")?;
    assert_eq!(user.name, "new");

    let mut history = HistoryStore::new(fixture.storage());
    let result = score_with_rng(&heavy_survey(), &mut rng);
    history.append(&user.id.to_string(), result, heavy_survey())?;

    // Second sight resolves to the same account and finds its history.
    let mut accounts = AccountStore::new(fixture.storage());
    let again = accounts.find_or_register("new@example.com")?;
    assert_eq!(again.id, user.id);

    let log = history.read_all(&again.id.to_string())?;
    let summary = summarize(&log);
    assert_eq!(log.len(), 1);
    assert_eq!(summary.latest.unwrap().id, log[0].id);
    assert_eq!(summary.good_count, 0);
    Ok(())
}

#[test]
fn histories_stay_partitioned_between_users() -> Result<()> {
    let fixture = WorkspaceFixture::new();
    let mut rng = StdRng::seed_from_u64(12);

    let mut accounts = AccountStore::new(fixture.storage());
    let ada = accounts.register("Ada", "ada@example.com", "pw")?;
    let ben = accounts.register("Ben", "ben@example.com", "pw")?;

    let mut history = HistoryStore::new(fixture.storage());
    let result = score_with_rng(&heavy_survey(), &mut rng);
    history.append(&ada.id.to_string(), result, heavy_survey())?;

    assert_eq!(history.read_all(&ada.id.to_string())?.len(), 1);
    assert!(history.read_all(&ben.id.to_string())?.is_empty());
    Ok(())
}

#[test]
fn tampered_history_file_reads_as_empty() -> Result<()> {
    let fixture = WorkspaceFixture::new();
    let mut rng = StdRng::seed_from_u64(13);

    let mut history = HistoryStore::new(fixture.storage());
    let result = score_with_rng(&light_survey(), &mut rng);
    history.append("user-x", result, light_survey())?;

    std::fs::write(
        fixture.data_dir().join("footprint_history_user-x.json"),
        "{not valid json",
    )?;
    assert!(history.read_all("user-x")?.is_empty());
    Ok(())
}
