//! # Layout Selection Tests
//!
//! End-to-end path handling without a browser: href → location → layout →
//! declared route, plus the public chrome. Routes are read from the
//! `path!` declarations of each layout's `<Routes>` and matched the way
//! `leptos_router` matches them: static segments exactly, `:name`
//! segments capture one segment, a trailing slash is ignored.

use market_web::config::AppConfig;
use market_web::routing::{
    chrome_for, decode_param, select_layout, Chrome, CoopRoute, LayoutMode, MemberRoute,
    PublicRoute, RouteLocation, DEFAULT_LANDING,
};

const PUBLIC_LAYOUT: &str = include_str!("../src/layouts/public.rs");
const COOP_LAYOUT: &str = include_str!("../src/layouts/coop_owner.rs");
const MEMBER_LAYOUT: &str = include_str!("../src/layouts/member_dashboard.rs");

/// Paths declared with `path!("...")`, without path-less parent routes.
fn declared(source: &str) -> Vec<&str> {
    source
        .split("path!(\"")
        .skip(1)
        .filter_map(|rest| rest.split_once("\")").map(|(pattern, _)| pattern))
        .filter(|pattern| !pattern.is_empty())
        .collect()
}

fn layout_source(layout: LayoutMode) -> &'static str {
    match layout {
        LayoutMode::CooperativeOwner => COOP_LAYOUT,
        LayoutMode::MemberDashboard => MEMBER_LAYOUT,
        LayoutMode::Public => PUBLIC_LAYOUT,
    }
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Params captured when `pattern` matches `path`.
fn match_route(pattern: &str, path: &str) -> Option<Vec<(String, String)>> {
    let expected = segments(pattern);
    let actual = segments(path);
    if expected.len() != actual.len() {
        return None;
    }
    let mut params = Vec::new();
    for (want, got) in expected.iter().zip(&actual) {
        match want.strip_prefix(':') {
            Some(name) => params.push((name.to_string(), got.to_string())),
            None if want == got => {}
            None => return None,
        }
    }
    Some(params)
}

/// What the app would show for `href`.
#[derive(Debug, PartialEq)]
struct Mounted {
    layout: LayoutMode,
    /// Matched route path; `None` renders the layout's `NotFound` fallback.
    route: Option<&'static str>,
    params: Vec<(String, String)>,
    /// Public layout only.
    chrome: Option<Chrome>,
}

fn mount(href: &str) -> Mounted {
    let location = RouteLocation::parse(href);
    let path = location.pathname.as_str();
    let layout = select_layout(path);

    let matched = declared(layout_source(layout))
        .into_iter()
        .find_map(|pattern| match_route(pattern, path).map(|params| (pattern, params)));
    let (route, params) = match matched {
        Some((pattern, params)) => (Some(pattern), params),
        None => (None, Vec::new()),
    };

    Mounted {
        layout,
        route,
        params,
        chrome: (layout == LayoutMode::Public).then(|| chrome_for(path)),
    }
}

fn public(route: &'static str, chrome: Chrome) -> Mounted {
    Mounted {
        layout: LayoutMode::Public,
        route: Some(route),
        params: Vec::new(),
        chrome: Some(chrome),
    }
}

const FULL: Chrome = Chrome { nav: true, footer: true };
const BARE: Chrome = Chrome { nav: false, footer: false };

#[test]
fn test_coop_members_page() {
    // Act
    let mounted = mount("/CoopDashboard/Members");

    // Assert
    assert_eq!(mounted.layout, LayoutMode::CooperativeOwner);
    assert_eq!(mounted.route, Some(CoopRoute::Members.pattern()));
    assert_eq!(mounted.chrome, None);
}

#[test]
fn test_member_profile_detail_extracts_id() {
    let mounted = mount("/PetOwnerDashboard/PetProfile/42");

    assert_eq!(mounted.layout, LayoutMode::MemberDashboard);
    assert_eq!(
        mounted.route,
        Some(MemberRoute::ProfileDetail { id: String::new() }.pattern())
    );
    assert_eq!(mounted.params, vec![("id".to_string(), "42".to_string())]);
}

#[test]
fn test_encoded_detail_id_round_trips() {
    // Arrange
    let link = MemberRoute::OrderDetail { id: "farm plot/7".into() }.path();

    // Act
    let mounted = mount(&link);

    // Assert
    assert_eq!(mounted.route, Some("/PetOwnerDashboard/Orders/:id"));
    assert_eq!(decode_param(&mounted.params[0].1), "farm plot/7");
}

#[test]
fn test_login_hides_nav_and_footer() {
    assert_eq!(mount("/Login"), public(PublicRoute::Login.pattern(), BARE));
}

#[test]
fn test_home_shows_nav_and_footer() {
    assert_eq!(mount("/Home"), public(PublicRoute::Home.pattern(), FULL));
}

#[test]
fn test_root_redirects_to_landing() {
    // Act
    let mounted = mount("/");

    // Assert
    assert_eq!(mounted.route, Some("/"));
    assert!(PUBLIC_LAYOUT.contains("<Route path=path!(\"/\") view=LandingRedirect/>"));
    let landing = AppConfig::default().default_landing;
    assert_eq!(landing, DEFAULT_LANDING);
    assert_eq!(mount(landing), public(PublicRoute::Home.pattern(), FULL));
}

#[test]
fn test_unknown_path_falls_back_to_public() {
    let mounted = mount("/SomeUnknownPath");

    assert_eq!(
        mounted,
        Mounted {
            layout: LayoutMode::Public,
            route: None,
            params: Vec::new(),
            chrome: Some(FULL),
        }
    );
}

#[test]
fn test_full_urls_and_queries_route_by_pathname() {
    let mounted = mount("http://127.0.0.1:8080/CoopDashboard/Orders?page=2#top");
    assert_eq!(mounted.route, Some(CoopRoute::Orders.pattern()));

    assert_eq!(
        mount("/ResetPassword?token=abc"),
        public(PublicRoute::ResetPassword.pattern(), BARE)
    );
}

#[test]
fn test_unknown_dashboard_paths_stay_in_their_layout() {
    for (href, layout) in [
        ("/CoopDashboard/Nope", LayoutMode::CooperativeOwner),
        ("/CoopDashboardArchive", LayoutMode::CooperativeOwner),
        ("/PetOwnerDashboard/Nope", LayoutMode::MemberDashboard),
        ("/PetOwnerDashboard/PetProfile/42/edit", LayoutMode::MemberDashboard),
    ] {
        let mounted = mount(href);
        assert_eq!(mounted.layout, layout, "{href}");
        assert_eq!(mounted.route, None, "{href}");
    }
}

#[test]
fn test_farmer_pages_share_the_guarded_parent_route() {
    // Arrange
    let parent = PUBLIC_LAYOUT
        .split("<ParentRoute path=path!(\"\") view=FarmerArea>")
        .nth(1)
        .and_then(|rest| rest.split("</ParentRoute>").next())
        .expect("farmer parent route");

    // Assert
    for route in [PublicRoute::FarmerDashboard, PublicRoute::FarmerCrops, PublicRoute::FarmerOrders] {
        assert!(declared(parent).contains(&route.pattern()), "{}", route.pattern());
        assert_eq!(mount(route.path()), public(route.pattern(), BARE));
    }
}

#[test]
fn test_named_routes_and_declared_routes_agree() {
    let mut named: Vec<(LayoutMode, &str)> = PublicRoute::ALL
        .iter()
        .map(|r| (LayoutMode::Public, r.pattern()))
        .chain(CoopRoute::ALL.iter().map(|r| (LayoutMode::CooperativeOwner, r.pattern())))
        .chain(MemberRoute::ALL.iter().map(|r| (LayoutMode::MemberDashboard, r.pattern())))
        .collect();
    // the root redirect is declared but is not a view
    named.push((LayoutMode::Public, "/"));

    for layout in LayoutMode::ALL {
        let source = layout_source(layout);
        assert!(source.contains("<Routes fallback="), "{layout:?} has no fallback");

        let mut declared = declared(source);
        let mut expected: Vec<&str> = named
            .iter()
            .filter(|(l, _)| *l == layout)
            .map(|(_, pattern)| *pattern)
            .collect();
        declared.sort();
        expected.sort();
        assert_eq!(declared, expected, "{layout:?}");
    }
}

#[test]
fn test_selection_is_repeatable() {
    for href in ["/CoopDashboard", "/PetOwnerDashboard/Orders/7", "/Marketplace", ""] {
        assert_eq!(mount(href), mount(href), "{href}");
    }
}
