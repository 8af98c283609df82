use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use opsdeck::{
    AUTOMATIONS_SLOT, AutomationDraft, AutomationPlay, KeyValueStore, OpsConsole, PlayStatus,
    STAGES_SLOT, SqliteStore, StageDraft, WorkflowStage,
};

fn open_console(store: Arc<SqliteStore>) -> OpsConsole {
    OpsConsole::open(store).with_revert_delay(Duration::from_millis(50))
}

#[tokio::test]
async fn full_session_against_sqlite() -> Result<()> {
    opsdeck::logging::init();

    let dir = tempfile::tempdir()?;
    let db_path = dir.path().join("opsdeck.db");
    let store = Arc::new(SqliteStore::open(&db_path)?);

    let console = open_console(store.clone());
    assert_eq!(console.stages().await.len(), 3);
    assert_eq!(console.total_duration_minutes().await, 74);

    console
        .add_stage(StageDraft {
            title: "Hook Sculpting".to_string(),
            persona: "High-energy futurist storyteller".to_string(),
            objective: "Turn transcripts into hooks".to_string(),
            content_focus: "Bold predictions".to_string(),
            ai_prompt: "Rewrite the insight as hooks".to_string(),
            deliverables: "5 high-impact hooks, 2 title variants".to_string(),
            duration_minutes: 30,
            confidence: 80,
        })
        .await?;
    console
        .add_automation(AutomationDraft {
            name: "Pulse Post".to_string(),
            trigger: "New long-form script approved".to_string(),
            action: "Synthesize 3 micro-clips and queue to TikTok".to_string(),
            channel: "TikTok".to_string(),
            cadence: "48h after script approval".to_string(),
            tools: "Runway, CapCut API, TikTok Scheduler".to_string(),
            next_run: None,
        })
        .await?;

    console.run_automation("auto-repurpose").await?;
    let plays = console.automations().await;
    let running = plays.iter().find(|p| p.id == "auto-repurpose").unwrap();
    assert_eq!(running.status, PlayStatus::Running);

    tokio::time::sleep(Duration::from_millis(200)).await;
    let plays = console.automations().await;
    let reverted = plays.iter().find(|p| p.id == "auto-repurpose").unwrap();
    assert_eq!(reverted.status, PlayStatus::Scheduled);

    // A second session over the same database picks up the mutated ledgers.
    drop(console);
    let reopened = open_console(store);
    let stages = reopened.stages().await;
    assert_eq!(stages.len(), 4);
    assert_eq!(stages.last().unwrap().title, "Hook Sculpting");
    let plays = reopened.automations().await;
    assert_eq!(plays.len(), 3);
    assert_eq!(plays[0].name, "Pulse Post");
    let repurpose = plays.iter().find(|p| p.id == "auto-repurpose").unwrap();
    assert_eq!(repurpose.status, PlayStatus::Scheduled);
    assert!(repurpose.last_run.is_some());

    Ok(())
}

#[tokio::test]
async fn slot_payloads_use_the_camel_case_wire_layout() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let store = Arc::new(SqliteStore::open(dir.path().join("opsdeck.db"))?);

    let console = open_console(store.clone());
    console
        .add_stage(StageDraft {
            title: "Hook Sculpting".to_string(),
            duration_minutes: 20,
            confidence: 75,
            ..StageDraft::default()
        })
        .await?;

    let raw = store.get(STAGES_SLOT)?.unwrap();
    assert!(raw.contains("\"contentFocus\""));
    assert!(raw.contains("\"durationMinutes\""));
    let stored: Vec<WorkflowStage> = serde_json::from_str(&raw)?;
    assert_eq!(stored.len(), 4);

    Ok(())
}

#[tokio::test]
async fn legacy_slot_payload_loads_cleanly() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let store = Arc::new(SqliteStore::open(dir.path().join("opsdeck.db"))?);

    // Automations slot as earlier builds persisted it.
    store.set(
        AUTOMATIONS_SLOT,
        r#"[{"id":"auto-repurpose","name":"Sizzle Sync","trigger":"Podcast episode published","action":"Clip top 90 seconds.","channel":"Short-form video","cadence":"Within 2h of the drop","tools":["Descript AI"],"status":"running","lastRun":"Yesterday 19:20","nextRun":"Today 20:10"}]"#,
    )?;

    let console = open_console(store);
    let plays = console.automations().await;
    assert_eq!(plays.len(), 1);
    assert_eq!(plays[0].status, PlayStatus::Running);
    assert_eq!(plays[0].last_run.as_deref(), Some("Yesterday 19:20"));

    let stored: Vec<AutomationPlay> =
        serde_json::from_str(r#"[{"id":"x","name":"n","trigger":"t","action":"a","channel":"c","cadence":"cd","tools":[],"status":"idle"}]"#)?;
    assert_eq!(stored[0].status, PlayStatus::Idle);

    Ok(())
}
