// SPDX-License-Identifier: MPL-2.0
//! Reports screen rendering: filter bar, download action, and the report
//! table with its tri-state header control.

use super::state::{HeaderState, State};
use super::Message;
use crate::app::i18n::I18n;
use crate::domain::report::Report;
use crate::ui::components::{empty_state, status_tag};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, checkbox, scrollable, text_input, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};

/// Context required to render the reports screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(filter_bar(&ctx))
        .push(
            Container::new(report_table(&ctx))
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::SM)
                .style(styles::container::card),
        )
        .into()
}

fn filter_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let from_field = labeled_date_input(
        ctx.i18n.tr("reports-from-label"),
        ctx.state.from_input(),
        Message::FromInputChanged,
    );
    let to_field = labeled_date_input(
        ctx.i18n.tr("reports-to-label"),
        ctx.state.to_input(),
        Message::ToInputChanged,
    );

    let search_button = button(Text::new(ctx.i18n.tr("reports-search-files")).size(typography::BODY))
        .on_press(Message::ApplyFilters)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    let clear_label = Row::new()
        .spacing(spacing::XXS)
        .align_y(Vertical::Center)
        .push(icons::sized(icons::themed(icons::cross_circle()), sizing::ICON_SM))
        .push(Text::new(ctx.i18n.tr("reports-clear-filters")).size(typography::BODY));
    let mut clear_button = button(clear_label).padding([spacing::XS, spacing::MD]);
    if ctx.state.has_filter_input() {
        clear_button = clear_button
            .on_press(Message::ClearFilters)
            .style(styles::button::subtle);
    } else {
        clear_button = clear_button.style(styles::button::disabled());
    }

    let selected = ctx.state.selected_count();
    let download_label = Row::new()
        .spacing(spacing::XXS)
        .align_y(Vertical::Center)
        .push(icons::sized(
            icons::tinted(icons::download(), palette::WHITE),
            sizing::ICON_SM,
        ))
        .push(
            Text::new(ctx.i18n.tr_with_args(
                "reports-download-selected",
                &[("count", &selected.to_string())],
            ))
            .size(typography::BODY),
        );
    let mut download_button = button(download_label).padding([spacing::XS, spacing::MD]);
    if selected > 0 {
        download_button = download_button
            .on_press(Message::DownloadSelected)
            .style(styles::button::primary);
    } else {
        // Still pressable so the empty-selection notice can fire.
        download_button = download_button
            .on_press(Message::DownloadSelected)
            .style(styles::button::disabled());
    }

    Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Bottom)
        .push(from_field)
        .push(to_field)
        .push(search_button)
        .push(clear_button)
        .push(Space::new().width(Length::Fill))
        .push(download_button)
        .into()
}

fn labeled_date_input<'a>(
    label: String,
    value: &str,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::CAPTION))
        .push(
            text_input("YYYY-MM-DD", value)
                .on_input(on_input)
                .padding(spacing::XS)
                .width(Length::Fixed(sizing::DATE_INPUT_WIDTH)),
        )
        .into()
}

fn page_title<'a>(ctx: &ViewContext<'a>) -> String {
    match ctx.state.active_group() {
        Some(group) => ctx.i18n.tr_with_args(
            "reports-title-group",
            &[("group", group.replace('_', " ").as_str())],
        ),
        None => ctx.i18n.tr("reports-title-fallback"),
    }
}

fn report_table<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let filtered = ctx.state.filtered();

    let title = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Text::new(page_title(ctx)).size(typography::SUBTITLE))
        .push(
            Text::new(ctx.i18n.tr_with_args(
                "reports-found-count",
                &[("count", &filtered.len().to_string())],
            ))
            .size(typography::CAPTION),
        );

    let header = Container::new(
        Row::new()
            .align_y(Vertical::Center)
            .push(
                Container::new(select_all_control(ctx, filtered.is_empty()))
                    .width(Length::FillPortion(5))
                    .padding(spacing::XXS),
            )
            .push(header_cell(ctx.i18n.tr("column-report-name"), 20))
            .push(header_cell(ctx.i18n.tr("column-description"), 35))
            .push(header_cell(ctx.i18n.tr("column-report-date"), 12))
            .push(header_cell(ctx.i18n.tr("column-status"), 13))
            .push(header_cell(ctx.i18n.tr("column-download"), 15)),
    )
    .style(styles::container::table_header);

    let rows: Vec<Element<'a, Message>> = filtered
        .iter()
        .enumerate()
        .map(|(index, report)| report_row(ctx, report, index))
        .collect();

    let body: Element<'a, Message> = if rows.is_empty() {
        empty_state::view(ctx.i18n.tr("reports-empty"))
    } else {
        scrollable(Column::with_children(rows).spacing(spacing::XXS))
            .height(Length::Fill)
            .into()
    };

    Column::new()
        .spacing(spacing::XS)
        .push(title)
        .push(header)
        .push(body)
        .into()
}

fn header_cell(label: String, portion: u16) -> Element<'static, Message> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .width(Length::FillPortion(portion))
        .padding([spacing::XXS, spacing::XS])
        .into()
}

/// Header checkbox with a tri-state glyph: empty square, minus square, or
/// checked square. Pressing it selects the filtered rows unless they are
/// already all selected, in which case it clears them.
fn select_all_control<'a>(ctx: &ViewContext<'a>, disabled: bool) -> Element<'a, Message> {
    let header_state = ctx.state.header_state();
    let glyph = match header_state {
        HeaderState::Unchecked => icons::square(),
        HeaderState::Indeterminate => icons::square_minus(),
        HeaderState::Checked => icons::square_check(),
    };

    let control = button(icons::sized(icons::themed(glyph), sizing::ICON_MD))
        .padding(spacing::XXS)
        .style(styles::button::subtle);

    if disabled {
        control.into()
    } else {
        control
            .on_press(Message::SelectAllFiltered(
                header_state != HeaderState::Checked,
            ))
            .into()
    }
}

fn report_row<'a>(ctx: &ViewContext<'a>, report: &Report, index: usize) -> Element<'a, Message> {
    let id = report.id;
    let tick = checkbox(ctx.state.is_selected(id))
        .on_toggle(move |_| Message::ToggleSelection(id));

    let download_link = button(Text::new(ctx.i18n.tr("reports-download-pdf")).size(typography::BODY))
        .on_press(Message::DownloadRow(id))
        .padding(0.0)
        .style(styles::button::link);

    let row = Row::new()
        .align_y(Vertical::Center)
        .push(
            Container::new(tick)
                .width(Length::FillPortion(5))
                .padding(spacing::XXS),
        )
        .push(
            Container::new(Text::new(report.name.clone()).size(typography::BODY))
                .width(Length::FillPortion(20))
                .padding(spacing::XXS),
        )
        .push(
            Container::new(Text::new(report.description.clone()).size(typography::BODY))
                .width(Length::FillPortion(35))
                .padding(spacing::XXS),
        )
        .push(
            Container::new(Text::new(report.date.clone()).size(typography::BODY))
                .width(Length::FillPortion(12))
                .padding(spacing::XXS),
        )
        .push(
            Container::new(status_tag::view(
                ctx.i18n.tr(report.status.i18n_key()),
                report.status.i18n_key(),
            ))
            .width(Length::FillPortion(13))
            .padding(spacing::XXS),
        )
        .push(
            Container::new(download_link)
                .width(Length::FillPortion(15))
                .padding(spacing::XXS),
        );

    Container::new(row)
        .style(styles::container::table_row(index % 2 == 1))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ReportShelf;

    #[test]
    fn reports_view_renders_fallback_and_group_listings() {
        let i18n = I18n::default();
        let mut state = State::new(ReportShelf::generate());
        let _fallback = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
        drop(_fallback);

        state.open_group(Some("Ops_Reports".to_string()));
        let _grouped = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
    }

    #[test]
    fn reports_view_renders_an_empty_filtered_set() {
        let i18n = I18n::default();
        let mut state = State::new(ReportShelf::generate());
        state.set_from_input("1999-01-01".to_string());
        state.set_to_input("1999-12-31".to_string());
        state.apply_window();
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
    }
}
