//! Tests for full lobby workflows: catalog load, group chat, agent creation

use crate::common::{CATALOG, FakeService, move_to, settle};
use agora::app::{Message, NoticeLevel, Task, Worker};
use agora::config::{Config, Identity};
use agora::{AgentOrigin, App, ChatMode};
use std::sync::Arc;
use std::sync::mpsc::Receiver;

struct Harness {
    app: App,
    worker: Worker,
    messages: Receiver<Message>,
    service: Arc<FakeService>,
}

impl Harness {
    /// Start an app against `service` and let its startup tasks finish
    fn start(service: FakeService, config: Config) -> Result<Self, Box<dyn std::error::Error>> {
        let service = Arc::new(service);
        let (worker, messages) = Worker::new(service.clone());
        let mut app = App::new(config);
        let tasks = app.startup();
        settle(&mut app, &worker, &messages, tasks)?;
        Ok(Self {
            app,
            worker,
            messages,
            service,
        })
    }

    fn run(&mut self, tasks: Vec<Task>) -> Result<(), Box<dyn std::error::Error>> {
        settle(&mut self.app, &self.worker, &self.messages, tasks)
    }

    fn create(&mut self, name: &str, description: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.app.open_create_dialog();
        for c in name.chars() {
            self.app.dialog_input(c);
        }
        self.app.dialog_next_field();
        for c in description.chars() {
            self.app.dialog_input(c);
        }
        let task = self.app.submit_dialog().ok_or("expected a create task")?;
        self.run(vec![task])
    }
}

#[test]
fn test_group_chat_workflow() -> Result<(), Box<dyn std::error::Error>> {
    let mut h = Harness::start(FakeService::with_agents(&CATALOG), Config::default())?;
    assert_eq!(h.app.catalog.len(), 5);
    assert!(!h.app.catalog.is_loading());

    h.app.toggle_group_mode();
    move_to(&mut h.app, "Personal Trainer")?;
    h.app.activate_cursor();
    move_to(&mut h.app, "Scientist")?;
    h.app.activate_cursor();

    let route = h.app.launch()?;
    assert_eq!(route.to_string(), "group-chat/personal_trainer,scientist");
    assert!(h.app.should_quit);
    Ok(())
}

#[test]
fn test_group_cap_then_swap() -> Result<(), Box<dyn std::error::Error>> {
    let mut h = Harness::start(FakeService::with_agents(&CATALOG), Config::default())?;
    h.app.toggle_group_mode();
    for name in ["Writer", "Scientist", "News Editor", "Event Coordinator"] {
        move_to(&mut h.app, name)?;
        h.app.toggle_cursor_agent();
    }
    assert_eq!(h.app.selection.len(), 3);
    assert!(h.app.notices.iter().any(|n| n.level == NoticeLevel::Warning));

    // Dropping one member frees a slot for the agent that was refused
    move_to(&mut h.app, "Scientist")?;
    h.app.toggle_cursor_agent();
    move_to(&mut h.app, "Event Coordinator")?;
    h.app.toggle_cursor_agent();

    let route = h.app.launch()?;
    assert_eq!(
        route.to_string(),
        "group-chat/writer,news_editor,event_coordinator"
    );
    Ok(())
}

#[test]
fn test_view_dialog_single_chat() -> Result<(), Box<dyn std::error::Error>> {
    let mut h = Harness::start(FakeService::with_agents(&CATALOG), Config::default())?;
    move_to(&mut h.app, "News Editor")?;
    h.app.activate_cursor();
    assert!(h.app.dialog.is_open());

    assert!(h.app.submit_dialog().is_none());
    assert_eq!(
        h.app.navigation.as_ref().map(ToString::to_string),
        Some("chat/news_editor".to_string())
    );
    Ok(())
}

#[test]
fn test_create_agent_workflow() -> Result<(), Box<dyn std::error::Error>> {
    let mut h = Harness::start(FakeService::with_agents(&CATALOG), Config::default())?;
    h.create("Pastry Chef", "Bakes")?;

    assert_eq!(
        h.app.navigation.as_ref().map(ToString::to_string),
        Some("chat/pastry_chef".to_string())
    );
    let created = h
        .app
        .catalog
        .find("Pastry Chef")
        .ok_or("catalog not refreshed")?;
    assert_eq!(created.origin, AgentOrigin::Custom);
    assert_eq!(created.description, "Bakes");
    assert!(h.app.notices.iter().any(|n| n.level == NoticeLevel::Success));
    Ok(())
}

#[test]
fn test_create_failure_keeps_user_in_lobby() -> Result<(), Box<dyn std::error::Error>> {
    let mut h = Harness::start(
        FakeService::with_agents(&CATALOG).failing_create(),
        Config::default(),
    )?;
    h.create("Chef", "Cooks")?;

    assert!(h.app.navigation.is_none());
    assert!(!h.app.should_quit);
    let notice = h.app.notices.current().ok_or("expected an error notice")?;
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.text.starts_with("Error creating the agent"));
    Ok(())
}

#[test]
fn test_creation_finishing_after_reset_is_ignored() -> Result<(), Box<dyn std::error::Error>> {
    let mut h = Harness::start(FakeService::with_agents(&CATALOG), Config::default())?;

    h.app.open_create_dialog();
    for c in "Chef".chars() {
        h.app.dialog_input(c);
    }
    let task = h.app.submit_dialog().ok_or("expected a create task")?;
    h.app.reset();
    h.run(vec![task])?;

    assert!(h.app.navigation.is_none());
    assert_eq!(h.app.selection.mode(), ChatMode::Single);
    assert!(h.app.catalog.find("Chef").is_none());
    Ok(())
}

#[test]
fn test_fetch_failure_shows_error() -> Result<(), Box<dyn std::error::Error>> {
    let h = Harness::start(
        FakeService::with_agents(&CATALOG).failing_fetch(),
        Config::default(),
    )?;
    assert!(h.app.catalog.is_empty());
    assert!(!h.app.catalog.is_loading());
    let notice = h.app.notices.current().ok_or("expected an error notice")?;
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.text.starts_with("Failed to load agents"));
    Ok(())
}

#[test]
fn test_manual_refresh_picks_up_new_agents() -> Result<(), Box<dyn std::error::Error>> {
    let mut h = Harness::start(FakeService::with_agents(&CATALOG), Config::default())?;
    h.create("Chef", "Cooks")?;
    assert_eq!(h.app.catalog.len(), 6);

    let task = h.app.refresh_catalog();
    h.run(vec![task])?;
    assert_eq!(h.app.catalog.len(), 6);
    Ok(())
}

#[test]
fn test_startup_registers_user_once() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config {
        user: Some(Identity {
            email: "ada@example.com".to_string(),
            username: "Ada".to_string(),
        }),
        ..Config::default()
    };
    let mut h = Harness::start(FakeService::with_agents(&CATALOG), config)?;
    assert_eq!(h.service.registered(), ["Ada"]);

    // A second registration is rejected quietly
    let tasks = h.app.startup();
    h.run(tasks)?;
    assert_eq!(h.service.registered(), ["Ada"]);
    assert!(
        h.app
            .notices
            .iter()
            .all(|n| n.level != NoticeLevel::Error)
    );
    Ok(())
}
