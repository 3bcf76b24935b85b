mod bootstrap;

use std::process::ExitCode;

use anyhow::Result;
use sales_core::error;
use sales_core::models::MonthOrder;
use sales_core::settings::Settings;
use sales_data::analysis::{run_report, SalesAnalysis};
use sales_data::loader::SalesSource;
use sales_ui::app::{App, Screen};
use sales_ui::text_view;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let settings = Settings::load()?;

    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_deref())?;

    tracing::info!("Sales Report v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Source: {}, Output: {}, Order: {}",
        settings.source,
        settings.output,
        settings.order
    );

    let source = SalesSource::parse(&settings.source);
    let result = run_report(&source).await;
    let order = settings.month_order();

    match settings.output.as_str() {
        "json" => print_json(&result)?,
        "text" => print_text(&result, order),
        _ => {
            let app = App::new(&settings.theme, "Monthly Sales");
            app.run(Screen::from_result(&result, order)).await?;
        }
    }

    Ok(if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_json(result: &error::Result<SalesAnalysis>) -> error::Result<()> {
    println!("{}", render_json(result)?);
    Ok(())
}

/// Pretty JSON for a finished run, or `{"error": ...}` when loading failed.
fn render_json(result: &error::Result<SalesAnalysis>) -> error::Result<String> {
    let json = match result {
        Ok(analysis) => serde_json::to_string_pretty(analysis)?,
        Err(e) => serde_json::to_string_pretty(&serde_json::json!({
            "error": e.display_message(),
        }))?,
    };
    Ok(json)
}

fn print_text(result: &error::Result<SalesAnalysis>, order: MonthOrder) {
    match result {
        Ok(analysis) => print!("{}", text_view::render_text(&analysis.summary, order)),
        Err(e) => eprint!("{}", text_view::render_error_text(&e.display_message())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sales_core::error::SalesError;
    use sales_data::analysis::analyze_sales;

    #[test]
    fn test_render_json_for_summary() {
        let result = Ok(analyze_sales(
            "date,sku,unitPrice,quantity,totalPrice\n2023-01-05,A1,10.00,2,20.00\n",
        ));
        let value: serde_json::Value = serde_json::from_str(&render_json(&result).unwrap()).unwrap();

        assert_eq!(value["summary"]["total_store_sales"], 20.0);
        assert_eq!(value["summary"]["months"]["1-2023"]["most_popular_item"], "A1");
        assert_eq!(value["metadata"]["records_parsed"], 1);
    }

    #[test]
    fn test_render_json_for_load_error() {
        let result = Err(SalesError::HttpStatus {
            url: "http://localhost/sales.csv".to_string(),
            status: 404,
        });
        let value: serde_json::Value = serde_json::from_str(&render_json(&result).unwrap()).unwrap();

        assert_eq!(
            value["error"],
            "Error fetching the file: Request to http://localhost/sales.csv failed with status 404"
        );
    }
}
