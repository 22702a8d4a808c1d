//! End-to-end orchestration tests
//!
//! Exercises the full startup sequence against a real registry, real
//! providers and on-disk overlay folders. Declares two component manifests
//! of its own so discovery, ordering, layered texts, script registration
//! and marker bookkeeping all have material to work with.

// Force linkme registration of the default providers
extern crate armature_providers;

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use armature::application::components::{
    ComponentManifest, MarkerKind, StartupMarker, COMPONENTS,
};
use armature::bootstrap::config::FolderLayout;
use armature::bootstrap::startup::ComponentSet;
use armature::domain::ports::scripts::{DynamicScript, ScriptKind};
use armature::domain::ports::texts::LocalText;
use armature::domain::ports::{
    BehaviorDescriptor, BehaviorRegistry, ConfigRepository, DistributedCache,
    DynamicScriptRegistry, LocalCache, LocalTextRegistry, Logger, RequestContext,
};
use armature::{BootConfig, Result, RuntimeMode, ServiceRegistry, Startup};

// ============================================================================
// Test components
// ============================================================================

/// Registry-scoped tally for marker run-once assertions
struct MarkerTally(AtomicUsize);

fn bump_tally(registry: &ServiceRegistry) -> Result<()> {
    let tally =
        registry.resolve_or_register::<MarkerTally>(|| Ok(Arc::new(MarkerTally(AtomicUsize::new(0)))))?;
    tally.0.fetch_add(1, Ordering::SeqCst);
    Ok(())
}

fn register_signup_script(registry: &ServiceRegistry) -> Result<()> {
    let scripts = registry.resolve::<dyn DynamicScriptRegistry>()?;
    scripts.set(DynamicScript::new(
        "Form.Signup",
        ScriptKind::Form,
        r#"{"fields":["email"]}"#,
    ));
    Ok(())
}

fn web_enum_texts() -> Vec<LocalText> {
    vec![LocalText::invariant("enums.status.active", "Active")]
}

#[linkme::distributed_slice(COMPONENTS)]
static WEB_COMPONENT: ComponentManifest = ComponentManifest {
    enum_texts: Some(web_enum_texts),
    markers: &[
        StartupMarker {
            kind: MarkerKind::Startup,
            target: "integration::shared_tally",
            run: bump_tally,
        },
        StartupMarker {
            kind: MarkerKind::ScriptRegistrar,
            target: "integration::signup_script",
            run: register_signup_script,
        },
    ],
    ..ComponentManifest::new("armature-web")
};

fn site_nested_texts() -> Vec<LocalText> {
    vec![
        LocalText::invariant("site.welcome", "Welcome"),
        LocalText::new("de", "site.welcome", "Willkommen"),
    ]
}

fn site_scripts() -> Vec<DynamicScript> {
    vec![DynamicScript::new(
        "Lookup.Country",
        ScriptKind::Lookup,
        r#"[{"id":"de"},{"id":"fr"}]"#,
    )]
}

fn site_behaviors() -> Vec<BehaviorDescriptor> {
    vec![BehaviorDescriptor::new("audit-log", "save", "integration-site")]
}

#[linkme::distributed_slice(COMPONENTS)]
static SITE_COMPONENT: ComponentManifest = ComponentManifest {
    references: &["armature-web"],
    nested_texts: Some(site_nested_texts),
    scripts: Some(site_scripts),
    behaviors: Some(site_behaviors),
    markers: &[StartupMarker {
        kind: MarkerKind::Startup,
        target: "integration::shared_tally",
        run: bump_tally,
    }],
    ..ComponentManifest::new("integration-site")
};

// ============================================================================
// Helpers
// ============================================================================

fn boot_config(dir: &Path, mode: RuntimeMode) -> BootConfig {
    let mut config = BootConfig {
        mode,
        ..BootConfig::default()
    };
    config.logger.path = dir.join("log/app.log");
    config.settings.path = dir.join("appsettings.json");
    config.folders = FolderLayout {
        framework_texts: dir.join("framework-texts"),
        site_texts: dir.join("site-texts"),
        app_data_texts: dir.join("app-data-texts"),
        template_folders: vec![dir.join("templates")],
        script_folders: vec![],
        css_folders: vec![],
        watch_for_changes: false,
    };
    config
}

fn run_startup(dir: &Path, mode: RuntimeMode) -> Startup {
    let startup = Startup::new(
        Arc::new(ServiceRegistry::new()),
        Arc::new(boot_config(dir, mode)),
    );
    startup.run().expect("startup must succeed");
    startup
}

// ============================================================================
// End-to-end scenario
// ============================================================================

#[test]
fn full_run_resolves_every_capability() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("appsettings.json"),
        r#"{"Mail": {"host": "smtp.example.org"}}"#,
    )
    .unwrap();

    let startup = run_startup(dir.path(), RuntimeMode::ManagedHosted);
    let registry = startup.registry();

    assert!(registry.try_resolve::<ServiceRegistry>().is_some());
    assert!(registry.try_resolve::<dyn DistributedCache>().is_some());
    assert!(registry.try_resolve::<dyn Logger>().is_some());
    assert!(registry.try_resolve::<dyn LocalTextRegistry>().is_some());
    assert!(registry.try_resolve::<dyn RequestContext>().is_some());
    assert!(registry.try_resolve::<dyn BehaviorRegistry>().is_some());

    let cache = registry.resolve::<dyn LocalCache>().unwrap();
    assert_eq!(cache.provider_name(), "moka");

    let settings = registry
        .resolve_named::<dyn ConfigRepository>("Application")
        .unwrap();
    assert_eq!(settings.provider_name(), "json-settings");
    assert_eq!(
        settings.value("Mail", "host").unwrap(),
        Some(serde_json::json!("smtp.example.org"))
    );
}

#[test]
fn component_set_is_ordered_and_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let first = run_startup(dir.path(), RuntimeMode::ManagedHosted);
    let second = run_startup(dir.path(), RuntimeMode::ManagedHosted);

    let first_set = first.registry().resolve::<ComponentSet>().unwrap();
    let second_set = second.registry().resolve::<ComponentSet>().unwrap();

    assert_eq!(first_set.names(), second_set.names());

    // The dependency edge puts armature-web ahead of integration-site.
    let names = first_set.names();
    let web = names.iter().position(|n| *n == "armature-web").unwrap();
    let site = names.iter().position(|n| *n == "integration-site").unwrap();
    assert!(web < site);
}

#[test]
fn declared_texts_scripts_and_behaviors_are_registered() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("templates")).unwrap();
    std::fs::write(dir.path().join("templates/dialog.html"), "<div/>").unwrap();

    let startup = run_startup(dir.path(), RuntimeMode::ManagedHosted);
    let registry = startup.registry();

    let texts = registry.resolve::<dyn LocalTextRegistry>().unwrap();
    assert_eq!(texts.get("en", "site.welcome").as_deref(), Some("Welcome"));
    assert_eq!(
        texts.get("de-AT", "site.welcome").as_deref(),
        Some("Willkommen")
    );
    assert_eq!(
        texts.get("en", "enums.status.active").as_deref(),
        Some("Active")
    );

    let scripts = registry.resolve::<dyn DynamicScriptRegistry>().unwrap();
    assert!(scripts.get("Lookup.Country").is_some());
    assert!(scripts.get("Template.dialog").is_some());
    // Registered by the script-registrar marker.
    assert_eq!(
        scripts.get("Form.Signup").unwrap().kind,
        ScriptKind::Form
    );

    let behaviors = registry.resolve::<dyn BehaviorRegistry>().unwrap();
    let listed = behaviors.list();
    assert!(listed.iter().any(|b| b.key == "audit-log"));
}

#[test]
fn overlay_layers_override_in_folder_order() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("framework-texts")).unwrap();
    std::fs::create_dir_all(dir.path().join("app-data-texts")).unwrap();
    std::fs::write(
        dir.path().join("framework-texts/texts.json"),
        r#"{"dialogs": {"ok": "Framework OK"}, "layered": {"only": "framework"}}"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("app-data-texts/texts.json"),
        r#"{"dialogs": {"ok": "App OK"}}"#,
    )
    .unwrap();

    let startup = run_startup(dir.path(), RuntimeMode::ManagedHosted);
    let texts = startup
        .registry()
        .resolve::<dyn LocalTextRegistry>()
        .unwrap();

    // Application data beats both the framework overlay and the built-in.
    assert_eq!(texts.get("en", "dialogs.ok").as_deref(), Some("App OK"));
    // Keys only the lower layer defines still apply.
    assert_eq!(
        texts.get("en", "layered.only").as_deref(),
        Some("framework")
    );
}

#[test]
fn malformed_overlay_file_does_not_abort_startup() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("site-texts")).unwrap();
    std::fs::write(dir.path().join("site-texts/broken.json"), "{ nope").unwrap();
    std::fs::write(
        dir.path().join("site-texts/good.json"),
        r#"{"site": {"slogan": "still here"}}"#,
    )
    .unwrap();

    let startup = run_startup(dir.path(), RuntimeMode::ManagedHosted);
    let texts = startup
        .registry()
        .resolve::<dyn LocalTextRegistry>()
        .unwrap();
    assert_eq!(
        texts.get("en", "site.slogan").as_deref(),
        Some("still here")
    );
}

// ============================================================================
// Guard pattern properties
// ============================================================================

#[test]
fn shared_marker_target_runs_once_per_process() {
    let dir = tempfile::tempdir().unwrap();
    let startup = run_startup(dir.path(), RuntimeMode::ManagedHosted);

    // Two components declare the same target; only one execution happened.
    let tally = startup.registry().resolve::<MarkerTally>().unwrap();
    assert_eq!(tally.0.load(Ordering::SeqCst), 1);

    // Re-running the whole sequence does not run it again.
    startup.run().unwrap();
    let tally = startup.registry().resolve::<MarkerTally>().unwrap();
    assert_eq!(tally.0.load(Ordering::SeqCst), 1);
}

#[test]
fn host_wiring_survives_full_orchestration() {
    let dir = tempfile::tempdir().unwrap();
    let registry = Arc::new(ServiceRegistry::new());

    let custom = Arc::new(armature::providers::cache::MemoryLocalCache::new());
    registry.register::<dyn LocalCache>(custom.clone());

    let startup = Startup::new(
        registry.clone(),
        Arc::new(boot_config(dir.path(), RuntimeMode::ManagedHosted)),
    );
    startup.run().unwrap();

    let resolved = registry.resolve::<dyn LocalCache>().unwrap();
    assert_eq!(resolved.provider_name(), "memory");
    custom.set("probe", "1").unwrap();
    assert_eq!(resolved.get("probe").unwrap().as_deref(), Some("1"));
}

#[test]
fn steps_require_the_resolver_first() {
    let dir = tempfile::tempdir().unwrap();
    let startup = Startup::new(
        Arc::new(ServiceRegistry::new()),
        Arc::new(boot_config(dir.path(), RuntimeMode::ManagedHosted)),
    );

    assert!(startup.ensure_local_texts().is_err());
    startup.ensure_resolver().unwrap();
    assert!(startup.ensure_local_texts().is_ok());
}
