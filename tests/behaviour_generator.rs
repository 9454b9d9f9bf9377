//! Behaviour-driven tests for update manifest generation.
//!
//! Scenarios build release lists step by step and check the update entries
//! the generator emits. Tests use the rstest-bdd mutable world pattern.

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use update_manifest::{
    AddonId, Asset, AssetFilter, Release, UpdateManifest, generate_update_manifest,
};

// ---------------------------------------------------------------------------
// World types
// ---------------------------------------------------------------------------

#[derive(Default)]
struct GenerationWorld {
    releases: Vec<Release>,
    filter: AssetFilter,
    addon_id: Option<AddonId>,
    manifest: Option<UpdateManifest>,
}

impl GenerationWorld {
    fn updates(&self) -> &[update_manifest::Update] {
        let manifest = self.manifest.as_ref().expect("manifest generated");
        let addon_id = self.addon_id.as_ref().expect("addon id set");
        manifest
            .updates_for(addon_id.as_str())
            .expect("addon entry present")
    }
}

#[fixture]
fn world() -> GenerationWorld {
    GenerationWorld::default()
}

// ---------------------------------------------------------------------------
// Step definitions
// ---------------------------------------------------------------------------

#[given("no releases")]
fn given_no_releases(world: &mut GenerationWorld) {
    world.releases.clear();
}

#[given("a release \"{tag}\" with asset \"{name}\" at \"{url}\"")]
fn given_release_with_asset(world: &mut GenerationWorld, tag: String, name: String, url: String) {
    world
        .releases
        .push(Release::new(tag, vec![Asset::new(name, url)]));
}

#[given("the latest release also has asset \"{name}\" at \"{url}\"")]
fn given_extra_asset(world: &mut GenerationWorld, name: String, url: String) {
    let release = world.releases.last_mut().expect("a release was added");
    release.assets.push(Asset::new(name, url));
}

#[given("a release \"{tag}\" without assets")]
fn given_release_without_assets(world: &mut GenerationWorld, tag: String) {
    world.releases.push(Release::new(tag, Vec::new()));
}

#[given("the asset filter \"{pattern}\"")]
fn given_asset_filter(world: &mut GenerationWorld, pattern: String) {
    world.filter = AssetFilter::new(&pattern).expect("test pattern");
}

#[when("the manifest is generated for \"{addon_id}\"")]
fn when_manifest_generated(world: &mut GenerationWorld, addon_id: String) {
    let id = AddonId::try_from(addon_id).expect("test addon id");
    world.manifest = Some(generate_update_manifest(&world.releases, &id, &world.filter));
    world.addon_id = Some(id);
}

#[then("the manifest lists {count} updates")]
fn then_update_count(world: &mut GenerationWorld, count: usize) {
    assert_eq!(world.updates().len(), count);
}

#[then("the manifest has a single add-on entry")]
fn then_single_addon(world: &mut GenerationWorld) {
    let manifest = world.manifest.as_ref().expect("manifest generated");
    assert_eq!(manifest.addons.len(), 1);
}

#[then("update {position} has version \"{version}\" and link \"{link}\"")]
fn then_update_matches(world: &mut GenerationWorld, position: usize, version: String, link: String) {
    let update = world
        .updates()
        .get(position - 1)
        .expect("update at position");
    assert_eq!(update.version, version);
    assert_eq!(update.update_link, link);
}

// ---------------------------------------------------------------------------
// Scenario bindings
// ---------------------------------------------------------------------------

#[scenario(
    path = "tests/features/manifest_generation.feature",
    name = "Empty release list produces an empty update list"
)]
fn scenario_empty_release_list(world: GenerationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/manifest_generation.feature",
    name = "Leading v is stripped from release tags"
)]
fn scenario_strip_leading_v(world: GenerationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/manifest_generation.feature",
    name = "Only the first character is stripped from a word tag"
)]
fn scenario_strip_single_character(world: GenerationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/manifest_generation.feature",
    name = "Asset filter selects the signed package"
)]
fn scenario_filter_selects_signed(world: GenerationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/manifest_generation.feature",
    name = "The first asset is used when several remain"
)]
fn scenario_first_asset_wins(world: GenerationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/manifest_generation.feature",
    name = "A release without assets is skipped and later releases are kept"
)]
fn scenario_skip_empty_release(world: GenerationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/manifest_generation.feature",
    name = "A release whose assets are all filtered out is skipped"
)]
fn scenario_skip_filtered_release(world: GenerationWorld) {
    let _ = world;
}
