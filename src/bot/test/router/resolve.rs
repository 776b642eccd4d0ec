use super::*;

/// Tests parsing of exact and wildcard patterns.
///
/// Expected: trailing `*` yields a prefix pattern, anything else an exact one
#[test]
fn parses_patterns() {
    assert_eq!(
        RoutePattern::parse("b_selfassign_*"),
        RoutePattern::Prefix("b_selfassign_".to_string())
    );
    assert_eq!(
        RoutePattern::parse("hello"),
        RoutePattern::Exact("hello".to_string())
    );
}

/// Tests that a prefix pattern captures the rest of the identifier.
///
/// Expected: Some(wildcard segment) for matching identifiers, None otherwise
#[test]
fn captures_wildcard_segment() {
    let pattern = RoutePattern::parse("b_selfassign_*");

    assert_eq!(pattern.matches("b_selfassign_111;222"), Some("111;222"));
    assert_eq!(pattern.matches("b_selfassign_"), Some(""));
    assert_eq!(pattern.matches("s_selfassign_111"), None);
    assert_eq!(pattern.matches("hello"), None);
}

/// Tests that exact patterns only match the whole identifier.
///
/// Expected: Some("") for the literal, None for extensions of it
#[test]
fn matches_exact_pattern() {
    let pattern = RoutePattern::parse("hello");

    assert_eq!(pattern.matches("hello"), Some(""));
    assert_eq!(pattern.matches("hello_world"), None);
}

/// Tests that the default routes send each component family to its handler.
///
/// Expected: button and select identifiers resolve to their own handlers
#[test]
fn resolves_default_routes() {
    let router = Router::default();

    let (route, wildcard) = router.resolve("b_selfassign_111;222").unwrap();
    assert_eq!(route.handler, RouteHandler::SelfAssignButton);
    assert_eq!(route.module, CommandModule::SelfAssign);
    assert_eq!(wildcard, "111;222");

    let (route, _) = router.resolve("s_selfassign_colors").unwrap();
    assert_eq!(route.handler, RouteHandler::SelfAssignSelect);

    let (route, _) = router.resolve("hello").unwrap();
    assert_eq!(route.handler, RouteHandler::Hello);

    assert!(router.resolve("x_selfassign_111").is_none());
}

/// Tests that the longest literal prefix wins among overlapping patterns.
///
/// Verifies that registration order does not matter, and that an exact pattern
/// beats a prefix of the same literal.
///
/// Expected: the most specific route is selected
#[test]
fn prefers_most_specific_pattern() {
    let router = Router::new(vec![
        Route::new("b_selfassign_*", CommandModule::SelfAssign, RouteHandler::SelfAssignButton),
        Route::new("b_*", CommandModule::Base, RouteHandler::Hello),
        Route::new("b_selfassign_special", CommandModule::Base, RouteHandler::SelfAssignSelect),
    ]);

    let (route, wildcard) = router.resolve("b_selfassign_111").unwrap();
    assert_eq!(route.handler, RouteHandler::SelfAssignButton);
    assert_eq!(wildcard, "111");

    let (route, wildcard) = router.resolve("b_other").unwrap();
    assert_eq!(route.handler, RouteHandler::Hello);
    assert_eq!(wildcard, "other");

    let (route, _) = router.resolve("b_selfassign_special").unwrap();
    assert_eq!(route.handler, RouteHandler::SelfAssignSelect);
}
