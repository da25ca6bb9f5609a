//! Integration tests for the web test doubles.

use matchkit::assert_that;
use matchkit::constraint::{count_of, equal_to, satisfies};
use matchkit::event::{raises_property_changed, NotifyPropertyChanged, PropertyChanged};
use matchkit::web::{Lifecycle, LifecycleDriver, Phase, ProfileStub, SimulatedRequest};

#[test]
fn a_simulated_login_request_carries_everything_a_handler_needs() {
    let ctx = SimulatedRequest::post("/login?redirect=%2Fhome")
        .referer("https://example.test/welcome")
        .user_agent("matchkit-tests")
        .cookie("sid", "abc")
        .form_field("user", "ada")
        .form_field("pass", "s3cret")
        .session_value("attempts", "1")
        .build()
        .unwrap();

    assert_eq!(ctx.request.method(), http::Method::POST);
    assert_eq!(ctx.request.uri().path(), "/login");
    assert_eq!(ctx.query_value("redirect"), Some("%2Fhome"));
    assert_eq!(ctx.form_value("user"), Some("ada"));
    assert_eq!(ctx.session.get("attempts").map(String::as_str), Some("1"));
    assert_eq!(
        ctx.request.headers().get(http::header::COOKIE).unwrap(),
        "sid=abc"
    );
}

#[test]
fn profile_stub_supports_save_assertions() {
    let profiles = ProfileStub::new();

    // The code under test reads, mutates, and persists a profile.
    profiles.set("ada", "visits", 1);
    let visits = profiles.get("ada", "visits").and_then(|v| v.as_i64());
    profiles.set("ada", "visits", visits.unwrap_or(0) + 1);
    profiles.save("ada");

    assert_eq!(profiles.get("ada", "visits"), Some(2.into()));
    assert_that!(profiles.saved_users(), count_of(equal_to(1)));
    assert_that!(
        profiles.saved_users(),
        satisfies(|saved: &Vec<String>| saved.contains(&"ada".to_string()), "a save for ada")
    );
}

#[derive(Default)]
struct Banner {
    text: String,
    rendered: Option<String>,
}

impl Lifecycle for Banner {
    fn on_load(&mut self) {
        self.text = "hello".into();
    }

    fn on_render(&mut self) {
        self.rendered = Some(format!("<h1>{}</h1>", self.text));
    }
}

#[test]
fn lifecycle_driver_runs_phases_in_order() {
    let mut banner = Banner::default();
    let mut driver = LifecycleDriver::new();
    driver.run(&mut banner);

    assert_eq!(banner.rendered.as_deref(), Some("<h1>hello</h1>"));
    assert_eq!(
        driver.invoked(),
        &[Phase::Init, Phase::Load, Phase::Render, Phase::Unload]
    );
}

#[test]
fn lifecycle_driver_can_stop_before_rendering() {
    let mut banner = Banner::default();
    let mut driver = LifecycleDriver::new();
    driver.run_until(&mut banner, Phase::Load);

    assert_eq!(banner.text, "hello");
    assert_eq!(banner.rendered, None);
}

struct Toggle {
    on: std::cell::Cell<bool>,
    changes: PropertyChanged,
}

impl Toggle {
    fn flip(&self) {
        self.on.set(!self.on.get());
        self.changes.notify("on");
    }
}

impl NotifyPropertyChanged for Toggle {
    fn property_changed(&self) -> &PropertyChanged {
        &self.changes
    }
}

#[test]
fn event_constraint_composes_with_the_assertion_macro() {
    let toggle = Toggle {
        on: std::cell::Cell::new(false),
        changes: PropertyChanged::new(),
    };
    assert_that!(toggle, raises_property_changed("on", |t: &Toggle| t.flip()));
}
