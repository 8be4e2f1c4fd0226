//! Terminal front end for the analytics dashboard
//!
//! Loads every dashboard section from a running provider and prints the
//! render descriptions: the first table page, each chart's state, and the
//! page-level error banner when a section failed.

use clap::Parser;
use freelance_client::ApiClient;
use freelance_core::{Result, init_logging};
use freelance_dashboard::charts::{self, ChartView};
use freelance_dashboard::page::DashboardPage;
use freelance_dashboard::predict::PredictionForm;
use freelance_dashboard::table::TableView;

/// Render the freelancer analytics dashboard in the terminal
#[derive(Debug, Parser)]
#[command(name = "freelance-dashboard", version, about)]
struct Args {
    /// Base URL of the analytics provider
    #[arg(long, env = "FREELANCE_API_URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,

    /// Submit the default prediction form after loading the page
    #[arg(long)]
    predict: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;
    let args = Args::parse();

    let client = ApiClient::new(args.base_url);
    let page = DashboardPage::load(&client).await;

    if let Some(banner) = &page.error_banner {
        println!("! {banner}");
    }
    println!(
        "{}/8 sections loaded from {}",
        page.loaded_sections(),
        client.base_url()
    );
    println!();

    print_table(&page);
    print_chart("Summary", &charts::summary_tiles(page.summary.data.as_ref(), false));
    print_chart(
        "Earnings distribution",
        &charts::histogram_chart(page.distribution.data.as_ref(), false),
    );
    print_chart(
        "Income by job category",
        &charts::job_income_chart(page.job_income.data.as_deref(), false),
    );
    print_chart(
        "Category share",
        &charts::category_pie(page.category_share.data.as_deref(), false),
    );
    print_chart(
        "Experience levels",
        &charts::experience_chart(page.experience.data.as_deref(), false),
    );
    print_chart(
        "Jobs vs earnings",
        &charts::scatter_chart(page.scatter.data.as_ref(), false),
    );
    print_chart(
        "Model comparison",
        &charts::model_comparison_chart(page.model_comparison.data.as_ref(), false),
    );

    if args.predict {
        let form = PredictionForm::new();
        let prediction = form.submit(&client).await;
        println!();
        println!(
            "Prediction ({}): {} (p_yes = {:.2})",
            prediction.model_used, prediction.predicted_class, prediction.probability_yes
        );
        if let Some(note) = &prediction.note {
            println!("  note: {note}");
        }
    }

    Ok(())
}

fn print_table(page: &DashboardPage) {
    match page.records_table().render() {
        TableView::Loading => println!("Records: loading"),
        TableView::Empty => println!("Records: no data to display"),
        TableView::Grid(grid) => {
            println!(
                "Records: page {}/{} ({} rows total)",
                grid.page_info.current_page, grid.page_info.total_pages, grid.page_info.total_rows
            );
            println!("  {}", grid.columns.join(" | "));
            for row in &grid.rows {
                let cells: Vec<&str> = row.iter().map(|cell| cell.text.as_str()).collect();
                println!("  {}", cells.join(" | "));
            }
        }
    }
}

fn print_chart(title: &str, view: &ChartView) {
    match view {
        ChartView::Skeleton => println!("{title}: loading"),
        ChartView::Empty => println!("{title}: no data"),
        ChartView::Ready(chart) => {
            let series: Vec<String> = chart
                .datasets
                .iter()
                .map(|dataset| format!("{} ({} points)", dataset.label, dataset.data.len()))
                .collect();
            println!("{title}: {} labels; {}", chart.labels.len(), series.join(", "));
        }
    }
}
