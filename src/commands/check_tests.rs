use super::*;

fn selected(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

fn enabled(config: &Config) -> Vec<&str> {
    config
        .style
        .suites
        .iter()
        .filter(|(_, s)| s.enabled)
        .map(|(n, _)| n.as_str())
        .collect()
}

#[test]
fn select_suites_empty_keeps_all() {
    let mut config = Config::default();

    select_suites(&mut config, &[]).unwrap();

    assert_eq!(enabled(&config), vec!["blocks", "naming", "imports"]);
}

#[test]
fn select_suites_keeps_only_named() {
    let mut config = Config::default();

    select_suites(&mut config, &selected(&["imports", "blocks"])).unwrap();

    assert_eq!(enabled(&config), vec!["blocks", "imports"]);
}

#[test]
fn select_suites_does_not_reenable_disabled_suite() {
    let mut config = Config::default();
    config.style.suites["naming"].enabled = false;

    select_suites(&mut config, &selected(&["naming"])).unwrap();

    assert!(enabled(&config).is_empty());
}

#[test]
fn select_suites_rejects_unknown_name() {
    let mut config = Config::default();

    let err = select_suites(&mut config, &selected(&["javadoc"])).unwrap_err();

    assert_eq!(err.to_string(), "Configuration error: Unknown style suite 'javadoc'");
}

#[test]
fn color_choice_maps_to_mode() {
    assert_eq!(color_choice_to_mode(ColorChoice::Auto), ColorMode::Auto);
    assert_eq!(color_choice_to_mode(ColorChoice::Always), ColorMode::Always);
    assert_eq!(color_choice_to_mode(ColorChoice::Never), ColorMode::Never);
}
