//! Statistics Discord command with period navigation.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        core::{
            entry,
            model::Settings,
            navigation::Direction,
            report::{self, StatisticsReport},
            service_year::month_abbrev,
            settings,
            time::format_time,
        },
        errors::{Error, Result},
    };
    use chrono::Local;
    use poise::serenity_prelude as serenity;
    use std::fmt::Write;

    /// Where `/stats` should move before rendering.
    #[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
    pub enum Navigation {
        #[name = "Previous month"]
        PrevMonth,
        #[name = "Next month"]
        NextMonth,
        #[name = "Previous service year"]
        PrevYear,
        #[name = "Next service year"]
        NextYear,
        #[name = "Current month"]
        Current,
    }

    fn month_field(report: &StatisticsReport, settings: &Settings) -> Result<String> {
        let month = &report.month;
        let mut field = String::new();
        writeln!(&mut field, "**Countable:** {}", format_time(month.countable_hours))?;
        writeln!(&mut field, "**Recorded:** {}", format_time(month.total_hours))?;
        if month.is_over_limit() {
            writeln!(
                &mut field,
                "⚠️ **Over the 55h limit by:** {}",
                format_time(month.over_limit_hours)
            )?;
        }
        writeln!(
            &mut field,
            "**Breakdown:** {}",
            report::format_breakdown(&report.month_breakdown, settings)
        )?;
        if report.targets.monthly_target > 0.0 {
            write!(
                &mut field,
                "**Target:** {} ({})",
                format_time(report.targets.monthly_target),
                report::format_difference(report.targets.monthly_difference)
            )?;
        }
        Ok(field)
    }

    fn year_field(report: &StatisticsReport, settings: &Settings) -> Result<String> {
        let mut field = String::new();
        writeln!(
            &mut field,
            "**Countable:** {} / {}h",
            format_time(report.year_countable_hours),
            report.yearly_goal
        )?;
        writeln!(
            &mut field,
            "{}",
            report::format_progress_bar(report.goal_progress_percent, Some(15))
        )?;
        writeln!(&mut field, "**To goal:** {}", format_time(report.hours_to_goal))?;
        writeln!(
            &mut field,
            "**Breakdown:** {}",
            report::format_breakdown(&report.year.breakdown, settings)
        )?;
        if report.targets.yearly_target > 0.0 {
            write!(
                &mut field,
                "**Target:** {} ({})",
                format_time(report.targets.yearly_target),
                report::format_difference(report.targets.yearly_difference)
            )?;
        }
        Ok(field)
    }

    fn pace_field(report: &StatisticsReport) -> Result<String> {
        let daily = &report.daily;
        let mut field = String::new();
        writeln!(
            &mut field,
            "**Month:** {}/day over {} day{}",
            format_time(daily.monthly_requirement),
            daily.days_remaining_in_month,
            if daily.days_remaining_in_month == 1 { "" } else { "s" }
        )?;
        write!(
            &mut field,
            "**Year:** {}/day over {} days",
            format_time(daily.yearly_requirement),
            daily.days_remaining_in_year.max(0)
        )?;
        Ok(field)
    }

    fn series_field(report: &StatisticsReport) -> Result<String> {
        let mut field = String::from("```\n");
        for summary in &report.series {
            let marker = if summary.year == report.state.selected_year
                && summary.month0 == report.state.selected_month
            {
                '▶'
            } else {
                ' '
            };
            writeln!(
                &mut field,
                "{marker}{} {:>7}",
                month_abbrev(summary.month0),
                format_time(summary.data.countable_hours)
            )?;
        }
        field.push_str("```");
        Ok(field)
    }

    /// Shows monthly and yearly statistics for the selected period.
    #[poise::command(slash_command, prefix_command)]
    pub async fn stats(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Move the selected period before showing it"] navigate: Option<Navigation>,
    ) -> Result<()> {
        let data = ctx.data();
        let today = Local::now().date_naive();

        let state = {
            let mut navigator = data.navigator.lock().await;
            match navigate {
                Some(Navigation::PrevMonth) => navigator.navigate_month(Direction::Prev),
                Some(Navigation::NextMonth) => navigator.navigate_month(Direction::Next),
                Some(Navigation::PrevYear) => navigator.navigate_year(Direction::Prev),
                Some(Navigation::NextYear) => navigator.navigate_year(Direction::Next),
                Some(Navigation::Current) => {
                    navigator.reset(today);
                    navigator.state()
                }
                None => navigator.state(),
            }
        };

        let entries = entry::list_all_entries(&data.database).await?;
        let settings = settings::get_settings(&data.database).await?;
        let report = report::generate_statistics_report(&entries, &settings, &state, today);

        let embed = serenity::CreateEmbed::default()
            .title(format!("📊 {}", report.month_label))
            .description(format!("Service year {}", report.service_year_label))
            .color(0x0034_98DB)
            .field(report.month_label.clone(), month_field(&report, &settings)?, false)
            .field(
                format!("Service year {}", report.service_year_label),
                year_field(&report, &settings)?,
                false,
            )
            .field("Daily pace for the selected period", pace_field(&report)?, false)
            .field("Months", series_field(&report)?, false)
            .footer(serenity::CreateEmbedFooter::new(format!(
                "As of {}",
                today.format("%Y-%m-%d")
            )));

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
