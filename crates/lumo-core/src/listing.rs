// ── Listing pipeline ──
//
// Turns decoded light records into display-ready rows: a stable sort by
// group name, then projection into fixed-format strings. Rendering the
// rows (table borders, color) belongs to the presentation layer, not
// here.

use lumo_api::types::Light;

/// One display row, post-sort. All numeric fields are pre-formatted;
/// `index` is the row's position after sorting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightRow {
    pub index: usize,
    pub id: String,
    pub label: String,
    pub group: String,
    pub power: String,
    pub brightness: String,
    pub hue: String,
    pub kelvin: String,
    pub saturation: String,
}

/// Sort by group name, ascending. `sort_by` is stable, so records with
/// equal group names keep their response order -- that is the only
/// ordering guarantee; there is no secondary key.
pub fn sort_by_group(lights: &mut [Light]) {
    lights.sort_by(|a, b| a.group.name.cmp(&b.group.name));
}

/// Sort and project a query response into display rows.
pub fn build_rows(mut lights: Vec<Light>) -> Vec<LightRow> {
    sort_by_group(&mut lights);
    lights.iter().enumerate().map(project).collect()
}

fn project((index, light): (usize, &Light)) -> LightRow {
    LightRow {
        index,
        id: light.id.clone(),
        label: light.label.clone(),
        group: light.group.name.clone(),
        power: light.power.clone(),
        brightness: format!("{:.2}", light.brightness),
        hue: format!("{:.2}", light.color.hue),
        kelvin: light.color.kelvin.to_string(),
        saturation: format!("{:.1}", light.color.saturation),
    }
}
