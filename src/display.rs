//! Terminal rendering for single games.
//!
//! One line per turn: the face just rolled, the fruit left on each tree and
//! the crow's position on its path to the orchard.

use colored::{ColoredString, Colorize};

use crate::core::{DieFace, OrchardConfig, OrchardState, TREE_COUNT};
use crate::rules::GameResult;

const FRUIT_ICONS: [&str; TREE_COUNT] = ["🍏", "🍎", "🍐", "🍇"];
const BASKET_ICON: &str = "👜";
const CROW_ICON: &str = "🦅";
const PATH_ICON: &str = "🌳";
const HOME_ICON: &str = "🏡";

/// Icon for a die face.
#[must_use]
pub fn face_icon(face: DieFace) -> &'static str {
    match face {
        DieFace::Tree(tree) => FRUIT_ICONS.get(tree).copied().unwrap_or("?"),
        DieFace::Basket => BASKET_ICON,
        DieFace::Crow => CROW_ICON,
    }
}

fn repeat_icon(icon: &str, times: u32) -> String {
    (0..times).map(|_| format!("{} ", icon)).collect()
}

/// A tree as `count` icons, padded to `slots` columns.
#[must_use]
pub fn render_tree(icon: &str, count: u32, slots: u32) -> String {
    (0..slots)
        .map(|i| if count > i { format!("{} ", icon) } else { "  ".to_string() })
        .collect()
}

/// The crow's path: trees already crossed, the crow, trees still ahead, home.
///
/// Home disappears once the crow has arrived.
#[must_use]
pub fn render_crow(crow: u32, steps: u32) -> String {
    let crossed = steps.saturating_sub(crow);
    let ahead = crow.saturating_sub(1);
    let home = if crow == 0 { "" } else { HOME_ICON };
    format!("{}{} {}{}", repeat_icon(PATH_ICON, crossed), CROW_ICON, repeat_icon(PATH_ICON, ahead), home)
}

/// One line describing a snapshot.
#[must_use]
pub fn render_state(state: &OrchardState, config: &OrchardConfig) -> String {
    let played = match state.last_roll {
        Some(face) => format!("{}    ==>   ", face_icon(face)),
        None => " ".repeat(11),
    };
    let trees: Vec<String> = state
        .trees
        .iter()
        .zip(FRUIT_ICONS)
        .map(|(&count, icon)| render_tree(icon, count, config.fruits_per_tree))
        .collect();

    format!(
        "{}{}    {}",
        played,
        trees.join("   "),
        render_crow(state.crow, config.crow_steps)
    )
}

/// Closing message: green for a win, red for a loss.
#[must_use]
pub fn render_outcome(result: GameResult) -> ColoredString {
    match result {
        GameResult::Won => "You won!".green(),
        GameResult::Lost => "You lost...".red(),
    }
}
