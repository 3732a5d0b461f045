// SPDX-License-Identifier: MPL-2.0
//! Ops screen rendering: search bar, the transfer table, and the arrival
//! side panel.

use super::state::State;
use super::Message;
use crate::app::i18n::I18n;
use crate::domain::transfer::{TransferFile, TransferStatus};
use crate::ui::components::{empty_state, search_bar, status_tag};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, scrollable, Column, Container, Row, Text};
use iced::{alignment::Vertical, Element, Length};

/// Context required to render the ops screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    /// Shared shell toggle; when set the arrival panel is rendered next to
    /// the transfer table.
    pub show_notifications: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("ops-title")).size(typography::TITLE);

    let search = search_bar::view(
        ctx.i18n.tr("ops-search-placeholder"),
        ctx.state.search(),
        Message::SearchChanged,
    );

    let mut content_row = Row::new().spacing(spacing::LG).push(
        Container::new(transfer_table(&ctx))
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(styles::container::card),
    );

    if ctx.show_notifications {
        content_row = content_row.push(arrival_panel(&ctx));
    }

    Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(title)
        .push(search)
        .push(content_row)
        .into()
}

fn transfer_table<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let files = ctx.state.filtered_files();

    let subtitle = Text::new(ctx.i18n.tr_with_args(
        "ops-files-title",
        &[("count", &files.len().to_string())],
    ))
    .size(typography::SUBTITLE);

    let header = Container::new(
        Row::new()
            .align_y(Vertical::Center)
            .push(header_cell(ctx.i18n.tr("column-file-id"), 15))
            .push(header_cell(ctx.i18n.tr("column-file-name"), 35))
            .push(header_cell(ctx.i18n.tr("column-destination"), 25))
            .push(header_cell(ctx.i18n.tr("column-status"), 13))
            .push(header_cell(ctx.i18n.tr("column-action"), 12)),
    )
    .style(styles::container::table_header);

    let rows: Vec<Element<'a, Message>> = files
        .iter()
        .enumerate()
        .map(|(index, file)| file_row(ctx, file, index))
        .collect();

    let body: Element<'a, Message> = if rows.is_empty() {
        empty_state::view(ctx.i18n.tr("ops-files-empty"))
    } else {
        scrollable(Column::with_children(rows).spacing(spacing::XXS))
            .height(Length::Fill)
            .into()
    };

    Column::new()
        .spacing(spacing::XS)
        .push(subtitle)
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

/// The action button reflects the row's lifecycle: only a Ready row is
/// pressable.
fn transfer_button<'a>(ctx: &ViewContext<'a>, file: &TransferFile) -> Element<'a, Message> {
    let (label_key, icon) = match file.status {
        TransferStatus::Ready => ("ops-transfer", icons::arrows_swap()),
        TransferStatus::Processing => ("ops-moving", icons::arrows_swap()),
        TransferStatus::Transferred => ("ops-completed", icons::square_check()),
    };

    let content = Row::new()
        .spacing(spacing::XXS)
        .align_y(Vertical::Center)
        .push(icons::sized(icons::tinted(icon, palette::WHITE), sizing::ICON_SM))
        .push(Text::new(ctx.i18n.tr(label_key)).size(typography::BODY));

    let control = button(content).padding([spacing::XXS, spacing::XS]);
    match file.status {
        TransferStatus::Ready => control
            .on_press(Message::Transfer(file.id.clone()))
            .style(styles::button::primary)
            .into(),
        TransferStatus::Processing | TransferStatus::Transferred => {
            control.style(styles::button::disabled()).into()
        }
    }
}

fn file_row<'a>(ctx: &ViewContext<'a>, file: &TransferFile, index: usize) -> Element<'a, Message> {
    let destination =
        Container::new(Text::new(file.destination_folder.clone()).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::container::destination_tag);

    let row = Row::new()
        .align_y(Vertical::Center)
        .push(
            Container::new(Text::new(file.id.to_string()).size(typography::BODY))
                .width(Length::FillPortion(15))
                .padding(spacing::XXS),
        )
        .push(
            Container::new(Text::new(file.file_name.clone()).size(typography::BODY))
                .width(Length::FillPortion(35))
                .padding(spacing::XXS),
        )
        .push(
            Container::new(destination)
                .width(Length::FillPortion(25))
                .padding(spacing::XXS),
        )
        .push(
            Container::new(status_tag::view(
                ctx.i18n.tr(file.status.i18n_key()),
                file.status.i18n_key(),
            ))
            .width(Length::FillPortion(13))
            .padding(spacing::XXS),
        )
        .push(
            Container::new(transfer_button(ctx, file))
                .width(Length::FillPortion(12))
                .padding(spacing::XXS),
        );

    Container::new(row)
        .style(styles::container::table_row(index % 2 == 1))
        .into()
}

fn arrival_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let arrivals = ctx.state.arrivals();

    let header = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(icons::sized(icons::themed(icons::bell()), sizing::ICON_MD))
        .push(
            Text::new(format!(
                "{} ({})",
                ctx.i18n.tr("ops-arrivals-title"),
                arrivals.len()
            ))
            .size(typography::SUBTITLE),
        );

    let mut list = Column::new().spacing(spacing::XS);
    if arrivals.is_empty() {
        list = list.push(empty_state::view(ctx.i18n.tr("ops-arrivals-empty")));
    } else {
        for arrival in arrivals {
            let get_button = button(
                Row::new()
                    .spacing(spacing::XXS)
                    .align_y(Vertical::Center)
                    .push(icons::sized(
                        icons::tinted(icons::plus(), palette::WHITE),
                        sizing::ICON_SM,
                    ))
                    .push(Text::new(ctx.i18n.tr("ops-get-file")).size(typography::BODY)),
            )
            .on_press(Message::GetFile(arrival.id.clone()))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::button::primary);

            let details = Column::new()
                .push(Text::new(arrival.file_name.clone()).size(typography::BODY))
                .push(
                    Text::new(format!("ID: {}", arrival.id))
                        .size(typography::CAPTION),
                )
                .push(
                    Text::new(ctx.i18n.tr_with_args(
                        "ops-arrival-destination",
                        &[("folder", arrival.destination_folder.as_str())],
                    ))
                    .size(typography::CAPTION),
                );

            list = list.push(
                Container::new(
                    Row::new()
                        .spacing(spacing::XS)
                        .align_y(Vertical::Center)
                        .push(Container::new(details).width(Length::Fill))
                        .push(get_button),
                )
                .padding(spacing::XS)
                .style(styles::container::card),
            );
        }
    }

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(header)
            .push(scrollable(list)),
    )
    .width(Length::Fixed(sizing::PANEL_WIDTH))
    .padding(spacing::SM)
    .style(styles::container::panel)
    .into()
}
