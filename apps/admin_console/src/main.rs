use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use client_core::{
    load_settings, ElementId, Field, FormState, HttpProductApi, InMemoryForm, Modal, ProductApi,
    ProductFormController, SubmitEvent, SubmitOutcome,
};
use shared::{
    domain::{ProductId, ProductRow},
    protocol::{ProductListQuery, ProductOrder},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod terminal;

use terminal::{TerminalAlert, TerminalToast};

#[derive(Parser, Debug)]
#[command(about = "Manage the product catalog through the admin API")]
struct Cli {
    /// Overrides `base_url` from admin.toml and the environment.
    #[arg(long, global = true)]
    base_url: Option<String>,
    /// Reject malformed numbers instead of sending them as null.
    #[arg(long, global = true)]
    strict_numbers: bool,
    /// Do not wait for Enter after a blocking alert.
    #[arg(long, global = true)]
    no_wait: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List products the way the admin table renders them.
    List {
        #[arg(long, value_enum, default_value_t = OrderArg::Id)]
        order_by: OrderArg,
        #[arg(long)]
        asc: bool,
        #[arg(long)]
        category: Option<i64>,
    },
    /// Open the edit modal for a product, apply changes and submit it.
    Edit {
        #[arg(long)]
        id: i64,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Open the delete confirmation for a product and submit it.
    Delete {
        #[arg(long)]
        id: i64,
    },
    /// Fill the add modal and submit it.
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OrderArg {
    Id,
    Name,
    Price,
}

impl From<OrderArg> for ProductOrder {
    fn from(value: OrderArg) -> Self {
        match value {
            OrderArg::Id => Self::Id,
            OrderArg::Name => Self::Name,
            OrderArg::Price => Self::Price,
        }
    }
}

/// Raw field input, kept as text the way the modal inputs hold it.
#[derive(Args, Debug, Default)]
struct FieldArgs {
    #[arg(long)]
    sku: Option<String>,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    price: Option<String>,
    #[arg(long)]
    stock: Option<String>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    description: Option<String>,
}

impl FieldArgs {
    fn entries(&self) -> [(Field, Option<&str>); 6] {
        [
            (Field::Sku, self.sku.as_deref()),
            (Field::Name, self.name.as_deref()),
            (Field::Price, self.price.as_deref()),
            (Field::Stock, self.stock.as_deref()),
            (Field::Category, self.category.as_deref()),
            (Field::Description, self.description.as_deref()),
        ]
    }

    /// Writes only the fields that were given, leaving the rest as populated.
    fn apply(&self, form: &dyn FormState, modal: Modal) -> Result<()> {
        for (field, value) in self.entries() {
            if let Some(value) = value {
                form.set_input_value(ElementId::new(modal, field), value)?;
            }
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    let cli = Cli::parse();

    let mut settings = load_settings();
    if let Some(base_url) = &cli.base_url {
        settings.base_url = base_url.clone();
    }
    if cli.strict_numbers {
        settings.strict_numbers = true;
    }
    let base_url = settings.base_url().context("resolving admin API base url")?;
    info!(%base_url, strict_numbers = settings.strict_numbers, "admin console ready");

    let api = Arc::new(HttpProductApi::new(base_url));
    let form = Arc::new(InMemoryForm::admin_page());
    let controller = ProductFormController::new(
        form.clone(),
        api.clone(),
        Arc::new(TerminalToast::new()),
        Arc::new(TerminalAlert { wait: !cli.no_wait }),
    )
    .with_number_mode(settings.number_mode());

    match cli.command {
        Command::List {
            order_by,
            asc,
            category,
        } => {
            let query = ProductListQuery {
                order_by: order_by.into(),
                desc: !asc,
                category_id: category,
            };
            let products = api.list(query).await.context("listing products")?;
            for product in &products {
                println!("{}", row_line(&ProductRow::from(product)));
            }
            println!("{} product(s)", products.len());
        }
        Command::Edit { id, fields } => {
            let row = fetch_row(api.as_ref(), id).await?;
            controller.open_edit(&row)?;
            fields.apply(form.as_ref(), Modal::Edit)?;
            let outcome = controller.submit_edit(&mut SubmitEvent::new()).await?;
            log_outcome("edit", &outcome);
        }
        Command::Delete { id } => {
            let row = fetch_row(api.as_ref(), id).await?;
            controller.open_delete(&row)?;
            let name = form.text(ElementId::new(Modal::Delete, Field::Name))?;
            println!("Deleting product \"{name}\"");
            let outcome = controller.submit_delete(&mut SubmitEvent::new()).await?;
            log_outcome("delete", &outcome);
        }
        Command::Add { fields } => {
            fields.apply(form.as_ref(), Modal::Add)?;
            let outcome = controller.submit_add(&mut SubmitEvent::new()).await?;
            log_outcome("add", &outcome);
        }
    }

    Ok(())
}

async fn fetch_row(api: &dyn ProductApi, id: i64) -> Result<ProductRow> {
    let product = api
        .get(ProductId(id))
        .await
        .with_context(|| format!("loading product {id}"))?;
    Ok(ProductRow::from(&product))
}

fn row_line(row: &ProductRow) -> String {
    format!(
        "#{:<5} {:<12} {:<30} {:>10} stock={:<5} category={}",
        row.id, row.sku, row.name, row.price, row.stock, row.category
    )
}

fn log_outcome(action: &str, outcome: &SubmitOutcome) {
    match outcome {
        SubmitOutcome::Succeeded => info!(action, "submitted"),
        other => error!(action, outcome = ?other, "submission not accepted"),
    }
}
