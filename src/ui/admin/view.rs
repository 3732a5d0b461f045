// SPDX-License-Identifier: MPL-2.0
//! Admin screen rendering: search bar plus the pending and approved request
//! tables.

use super::state::State;
use super::Message;
use crate::app::i18n::I18n;
use crate::domain::request::{Decision, SubscriptionRequest};
use crate::ui::components::{empty_state, search_bar};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::svg::Svg;
use iced::widget::{button, scrollable, Column, Container, Row, Text};
use iced::{alignment::Vertical, Element, Length};

/// Context required to render the admin screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("admin-title")).size(typography::TITLE);

    let search = search_bar::view(
        ctx.i18n.tr("admin-search-placeholder"),
        ctx.state.search(),
        Message::SearchChanged,
    );

    let pending = request_table(
        &ctx,
        ctx.i18n.tr_with_args(
            "admin-pending-title",
            &[("count", &ctx.state.pending_view().len().to_string())],
        ),
        ctx.state.pending_view(),
        RowActions::ApproveDeny,
        ctx.i18n.tr("admin-pending-empty"),
    );

    let approved = request_table(
        &ctx,
        ctx.i18n.tr_with_args(
            "admin-approved-title",
            &[("count", &ctx.state.approved_view().len().to_string())],
        ),
        ctx.state.approved_view(),
        RowActions::Revoke,
        ctx.i18n.tr("admin-approved-empty"),
    );

    Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(title)
        .push(search)
        .push(scrollable(
            Column::new()
                .spacing(spacing::MD)
                .push(pending)
                .push(approved),
        ))
        .into()
}

/// Which action buttons a table's rows carry.
#[derive(Clone, Copy)]
enum RowActions {
    ApproveDeny,
    Revoke,
}

fn request_table<'a>(
    ctx: &ViewContext<'a>,
    title: String,
    requests: Vec<&'a SubscriptionRequest>,
    actions: RowActions,
    empty_message: String,
) -> Element<'a, Message> {
    let header = Container::new(
        Row::new()
            .align_y(Vertical::Center)
            .push(header_cell(ctx.i18n.tr("column-user"), 15))
            .push(header_cell(ctx.i18n.tr("column-ad-group"), 15))
            .push(header_cell(ctx.i18n.tr("column-folder"), 15))
            .push(header_cell(ctx.i18n.tr("column-report-name"), 25))
            .push(header_cell(ctx.i18n.tr("column-date"), 10))
            .push(header_cell(ctx.i18n.tr("column-action"), 20)),
    )
    .style(styles::container::table_header);

    let rows: Vec<Element<'a, Message>> = requests
        .iter()
        .enumerate()
        .map(|(index, request)| request_row(ctx, request, actions, index))
        .collect();

    let body: Element<'a, Message> = if rows.is_empty() {
        empty_state::view(empty_message)
    } else {
        Column::with_children(rows).spacing(spacing::XXS).into()
    };

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(title).size(typography::SUBTITLE))
            .push(header)
            .push(body),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::container::card)
    .into()
}

fn header_cell(label: String, portion: u16) -> Element<'static, Message> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .width(Length::FillPortion(portion))
        .padding([spacing::XXS, spacing::XS])
        .into()
}

fn action_button<'a>(
    label: String,
    icon: Svg<'static>,
    message: Message,
    style: fn(&iced::Theme, button::Status) -> button::Style,
) -> Element<'a, Message> {
    button(
        Row::new()
            .spacing(spacing::XXS)
            .align_y(Vertical::Center)
            .push(icons::sized(icons::tinted(icon, palette::WHITE), sizing::ICON_SM))
            .push(Text::new(label).size(typography::BODY)),
    )
    .on_press(message)
    .padding([spacing::XXS, spacing::XS])
    .style(style)
    .into()
}

fn request_row<'a>(
    ctx: &ViewContext<'a>,
    request: &SubscriptionRequest,
    actions: RowActions,
    index: usize,
) -> Element<'a, Message> {
    let id = request.id;

    let action_cell: Element<'a, Message> = match actions {
        RowActions::ApproveDeny => Row::new()
            .spacing(spacing::XS)
            .push(action_button(
                ctx.i18n.tr("admin-approve"),
                icons::check(),
                Message::Decide(id, Decision::Approve),
                styles::button::success,
            ))
            .push(action_button(
                ctx.i18n.tr("admin-deny"),
                icons::cross(),
                Message::Decide(id, Decision::Deny),
                styles::button::danger,
            ))
            .into(),
        // Revoking an approved subscription is the same transition as
        // denying it.
        RowActions::Revoke => action_button(
            ctx.i18n.tr("admin-revoke"),
            icons::rotate_ccw(),
            Message::Decide(id, Decision::Deny),
            styles::button::primary,
        ),
    };

    let folder_tag = Container::new(Text::new(request.folder.clone()).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::destination_tag);

    let row = Row::new()
        .align_y(Vertical::Center)
        .push(
            Container::new(Text::new(request.user_name.clone()).size(typography::BODY))
                .width(Length::FillPortion(15))
                .padding(spacing::XXS),
        )
        .push(
            Container::new(Text::new(request.ad_group.clone()).size(typography::BODY))
                .width(Length::FillPortion(15))
                .padding(spacing::XXS),
        )
        .push(
            Container::new(folder_tag)
                .width(Length::FillPortion(15))
                .padding(spacing::XXS),
        )
        .push(
            Container::new(Text::new(request.report_name.clone()).size(typography::BODY))
                .width(Length::FillPortion(25))
                .padding(spacing::XXS),
        )
        .push(
            Container::new(
                Text::new(request.date_requested.format("%Y-%m-%d").to_string())
                    .size(typography::BODY),
            )
            .width(Length::FillPortion(10))
            .padding(spacing::XXS),
        )
        .push(
            Container::new(action_cell)
                .width(Length::FillPortion(20))
                .padding(spacing::XXS),
        );

    Container::new(row)
        .style(styles::container::table_row(index % 2 == 1))
        .into()
}
