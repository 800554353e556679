#![cfg(test)]
// End-to-end runtime smoke test (headless)
// - Runs linotour::app::run with LINOTOUR_TEST_HEADLESS=1 to bypass raw TTY setup/restore.
// - HOME points at a temp dir so the settings skeleton lands there.
// - Waits until the first-run settings are written, then aborts; the task must not have panicked.

use std::time::Duration;

use linotour::args::Args;

#[tokio::test(flavor = "multi_thread")]
async fn runtime_smoke_headless_initializes_and_runs_without_panic() {
    let home = tempfile::tempdir().expect("tempdir");
    unsafe {
        std::env::set_var("LINOTOUR_TEST_HEADLESS", "1");
        std::env::set_var("HOME", home.path());
        std::env::remove_var("XDG_CONFIG_HOME");
    }
    let args = Args {
        data_dir: Some(std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data")),
        ..Args::default()
    };

    let settings = home.path().join(".config/linotour/settings.conf");
    let handle = tokio::spawn(async move { linotour::app::run(args).await });
    // Initialization is done once the chosen language has been persisted.
    for _ in 0..40 {
        let persisted = std::fs::read_to_string(&settings)
            .is_ok_and(|c| c.contains("language = pt-PT"));
        if persisted || handle.is_finished() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    if handle.is_finished() {
        match handle.await {
            Ok(run_result) => {
                if let Err(e) = run_result {
                    panic!("app::run returned error early: {e:?}");
                }
                return;
            }
            Err(join_err) => panic!("app::run task panicked: {join_err}"),
        }
    }

    handle.abort();
    match handle.await {
        Ok(run_result) => {
            if let Err(e) = run_result {
                panic!("app::run completed with error on abort race: {e:?}");
            }
        }
        Err(join_err) => {
            assert!(
                join_err.is_cancelled(),
                "app::run join error should be cancellation, got: {join_err}"
            );
        }
    }

    let content = std::fs::read_to_string(settings).expect("settings written on first run");
    assert!(content.contains("language = pt-PT"));
}
