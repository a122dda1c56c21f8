//! Catalog command handlers: list, add, edit, delete.

use tabled::Tabled;

use foodlist_core::{CoreError, Food, FoodForm, FoodId, Mutation};

use crate::cli::{AddArgs, DeleteArgs, EditArgs, FoodFields, GlobalOpts, ListArgs};
use crate::error::CliError;
use crate::output;

use super::{Catalog, util};

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct FoodRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Rating")]
    rating: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Restaurant")]
    restaurant: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl FoodRow {
    fn new(food: &Food, color: bool) -> Self {
        let (restaurant, status) = food.restaurant.as_ref().map_or_else(
            || (String::new(), String::new()),
            |r| {
                (
                    r.name.clone(),
                    output::paint_status(r.status.as_ref(), r.status.is_open(), color),
                )
            },
        );
        Self {
            id: food.id.to_string(),
            name: food.name.clone(),
            rating: format_rating(food),
            price: food.price.clone(),
            restaurant,
            status,
        }
    }
}

fn format_rating(food: &Food) -> String {
    if food.is_rated() {
        format!("{:.1}", food.rating)
    } else {
        "-".into()
    }
}

// ── Form helpers ────────────────────────────────────────────────────

/// Overlay the flags that were given onto `form`.
fn apply_fields(mut form: FoodForm, fields: FoodFields) -> FoodForm {
    if let Some(name) = fields.name {
        form.food_name = name;
    }
    if let Some(rating) = fields.rating {
        form.food_rating = rating;
    }
    if let Some(image) = fields.image {
        form.food_image = image;
    }
    if let Some(name) = fields.restaurant_name {
        form.restaurant_name = name;
    }
    if let Some(logo) = fields.restaurant_logo {
        form.restaurant_logo = logo;
    }
    if let Some(status) = fields.status {
        form.restaurant_status = status;
    }
    form
}

/// Load the catalog and look up `id` among the loaded items.
async fn load_existing(catalog: &Catalog, id: &FoodId, global: &GlobalOpts) -> Result<Food, CliError> {
    let spinner = util::spinner("Loading catalog", global);
    let loaded = catalog.load(Some("")).await;
    spinner.finish_and_clear();
    loaded?;

    catalog.find(id).ok_or_else(|| {
        CoreError::NotFound {
            id: id.to_string(),
        }
        .into()
    })
}

// ── Handlers ────────────────────────────────────────────────────────

pub async fn list(catalog: &Catalog, args: ListArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let spinner = util::spinner("Loading catalog", global);
    let loaded = catalog.load(args.search.as_deref()).await;
    spinner.finish_and_clear();
    loaded?;

    let mut pages = 1;
    while catalog.snapshot().has_more() && (args.all || pages < args.pages) {
        catalog.show_more();
        pages += 1;
    }

    let snap = catalog.snapshot();
    let color = output::should_color(global.color_mode());
    let out = output::render_list(
        global.format(),
        snap.visible_items(),
        |f| FoodRow::new(f, color),
        |f| format!("{}\t{}", f.id, f.name),
    );
    output::print_output(&out, global.quiet);

    if snap.has_more() {
        util::notify(
            global,
            &format!(
                "Showing {} of {} items. Use --pages {} or --all to see more.",
                snap.visible_items().len(),
                snap.total(),
                pages + 1
            ),
        );
    }
    Ok(())
}

pub async fn add(catalog: &Catalog, args: AddArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let payload = apply_fields(FoodForm::default(), args.fields)
        .into_payload()
        .map_err(CoreError::from)?;
    let name = payload.name.clone();

    let spinner = util::spinner("Adding food", global);
    let result = catalog.mutate(Mutation::Create(payload)).await;
    spinner.finish_and_clear();
    result?;

    util::notify(
        global,
        &format!("Added '{name}' ({} items in catalog)", catalog.snapshot().total()),
    );
    Ok(())
}

pub async fn edit(catalog: &Catalog, args: EditArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let id = FoodId::from(args.id);
    let existing = load_existing(catalog, &id, global).await?;

    let payload = apply_fields(FoodForm::from(&existing), args.fields)
        .into_payload()
        .map_err(CoreError::from)?;
    let name = payload.name.clone();

    let spinner = util::spinner("Updating food", global);
    let result = catalog.mutate(Mutation::Update { id, payload }).await;
    spinner.finish_and_clear();
    result?;

    util::notify(global, &format!("Updated '{name}'"));
    Ok(())
}

pub async fn delete(catalog: &Catalog, args: DeleteArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let id = FoodId::from(args.id);
    let existing = load_existing(catalog, &id, global).await?;

    if !util::confirm(
        &format!("Delete '{}' ({id})? This cannot be undone.", existing.name),
        "delete",
        global,
    )? {
        return Ok(());
    }

    let spinner = util::spinner("Deleting food", global);
    let result = catalog.mutate(Mutation::Delete { id }).await;
    spinner.finish_and_clear();
    result?;

    util::notify(global, &format!("Deleted '{}'", existing.name));
    Ok(())
}
