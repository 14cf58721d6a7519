use productor::application::session::SelectionAction;
use productor::domain::catalog::{Addon, BoxSize, CakeSize, ProductType, Shape};
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::fs::File;
use std::io::Error;
use std::path::Path;

pub const FLAVORS: [&str; 5] = ["vanilla", "chocolate", "red velvet", "oatmeal", "lemon"];

/// Draws a random selection, including ones the configuration must refuse.
pub fn random_action(rng: &mut StdRng) -> SelectionAction {
    let flavor = FLAVORS.choose(rng).copied().unwrap_or("vanilla").to_string();
    match rng.gen_range(0..10) {
        0 => {
            let product = [ProductType::Cake, ProductType::Cookies, ProductType::Muffins];
            SelectionAction::ChangeProductType(*product.choose(rng).unwrap())
        }
        1 => SelectionAction::SetSize(*CakeSize::ALL.choose(rng).unwrap()),
        2 => SelectionAction::SetLayers(rng.gen_range(0..6)),
        3 => SelectionAction::SetFlavor(flavor),
        4 => SelectionAction::ToggleAddon(*Addon::ALL.choose(rng).unwrap()),
        5 => SelectionAction::SetText("x".repeat(rng.gen_range(0..50))),
        6 => SelectionAction::SetShape(*[Shape::Circle, Shape::Heart].choose(rng).unwrap()),
        7 => {
            let sizes = [BoxSize::Four, BoxSize::Six, BoxSize::Twelve];
            SelectionAction::SetBoxSize(*sizes.choose(rng).unwrap())
        }
        8 => SelectionAction::ToggleBoxFlavor(flavor),
        _ => {
            // Keep resets rare so sequences build up state.
            if rng.gen_bool(0.2) {
                SelectionAction::StartOver
            } else {
                SelectionAction::SetLayers(rng.gen_range(1..=3))
            }
        }
    }
}

/// Writes an action script of `rows` valid cake selections.
pub fn generate_cake_script(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["action", "value"])?;
    wtr.write_record(["size", "8"])?;
    wtr.write_record(["flavor", "vanilla"])?;

    for i in 0..rows {
        // An even number of toggles leaves the add-on off.
        wtr.write_record(["addon", "fruit"])?;
        wtr.write_record(["layers", &(i % 3 + 1).to_string()])?;
    }

    wtr.flush()?;
    Ok(())
}
