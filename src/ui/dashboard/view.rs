// SPDX-License-Identifier: MPL-2.0
//! Dashboard rendering: search bar, tab switcher, the active group table,
//! and the notice side panel.

use super::state::{State, Tab};
use super::Message;
use crate::app::i18n::I18n;
use crate::domain::group::ReportGroup;
use crate::ui::components::{empty_state, search_bar, status_tag};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, scrollable, Column, Container, Row, Text};
use iced::{alignment::Vertical, Element, Length};

/// Context required to render the dashboard.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    /// Shared shell toggle; when set the notice panel is rendered next to
    /// the active table.
    pub show_notifications: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let search = search_bar::view(
        ctx.i18n.tr("dashboard-search-placeholder"),
        ctx.state.search(),
        Message::SearchChanged,
    );

    let tabs = tab_switcher(&ctx);

    let table = match ctx.state.active_tab() {
        Tab::Subscribed => subscribed_table(&ctx),
        Tab::Unsubscribed => unsubscribed_table(&ctx),
        Tab::Pending => pending_table(&ctx),
    };

    let mut content_row = Row::new().spacing(spacing::LG).push(
        Container::new(table)
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(styles::container::card),
    );

    if ctx.show_notifications {
        content_row = content_row.push(notice_panel(&ctx));
    }

    Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(search)
        .push(tabs)
        .push(content_row)
        .into()
}

fn tab_switcher<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let counts = [
        (Tab::Subscribed, ctx.state.filtered_subscribed().len()),
        (Tab::Unsubscribed, ctx.state.filtered_unsubscribed().len()),
        (Tab::Pending, ctx.state.filtered_pending().len()),
    ];

    let mut row = Row::new().spacing(spacing::XS);
    for (tab, count) in counts {
        let label = format!("{} ({count})", ctx.i18n.tr(tab.i18n_key()));
        row = row.push(
            button(Text::new(label).size(typography::BODY))
                .on_press(Message::TabSelected(tab))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::tab(tab == ctx.state.active_tab())),
        );
    }
    row.into()
}

fn header_cell(label: String, portion: u16) -> Element<'static, Message> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .width(Length::FillPortion(portion))
        .padding([spacing::XXS, spacing::XS])
        .into()
}

fn header_row<'a>(cells: Vec<Element<'a, Message>>) -> Element<'a, Message> {
    Container::new(Row::with_children(cells).align_y(Vertical::Center))
        .style(styles::container::table_header)
        .into()
}

fn body<'a>(
    rows: Vec<Element<'a, Message>>,
    empty_message: String,
) -> Element<'a, Message> {
    if rows.is_empty() {
        empty_state::view(empty_message)
    } else {
        scrollable(Column::with_children(rows).spacing(spacing::XXS))
            .height(Length::Fill)
            .into()
    }
}

fn subscribed_table<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("dashboard-subscribed-title")).size(typography::SUBTITLE);

    let header = header_row(vec![
        header_cell(ctx.i18n.tr("column-group"), 30),
        header_cell(ctx.i18n.tr("column-description"), 40),
        header_cell(ctx.i18n.tr("column-date"), 15),
        header_cell(ctx.i18n.tr("column-status"), 15),
    ]);

    let rows = ctx
        .state
        .filtered_subscribed()
        .into_iter()
        .enumerate()
        .map(|(index, group)| subscribed_row(ctx, group, index))
        .collect();

    Column::new()
        .spacing(spacing::XS)
        .push(title)
        .push(header)
        .push(body(rows, ctx.i18n.tr("dashboard-subscribed-empty")))
        .into()
}

fn subscribed_row<'a>(
    ctx: &ViewContext<'a>,
    group: &'a ReportGroup,
    index: usize,
) -> Element<'a, Message> {
    // The group name doubles as the navigation link to its reports.
    let name = button(Text::new(group.name.clone()).size(typography::BODY))
        .on_press(Message::ViewReports(group.name.clone()))
        .padding(0.0)
        .style(styles::button::link);

    let date = group
        .subscribed_on
        .map_or_else(|| "—".to_string(), |d| d.format("%Y-%m-%d").to_string());

    let row = Row::new()
        .align_y(Vertical::Center)
        .push(Container::new(name).width(Length::FillPortion(30)).padding(spacing::XXS))
        .push(
            Container::new(Text::new(group.description.as_str()).size(typography::BODY))
                .width(Length::FillPortion(40))
                .padding(spacing::XXS),
        )
        .push(
            Container::new(Text::new(date).size(typography::BODY))
                .width(Length::FillPortion(15))
                .padding(spacing::XXS),
        )
        .push(
            Container::new(status_tag::view(
                ctx.i18n.tr(group.status.i18n_key()),
                group.status.i18n_key(),
            ))
            .width(Length::FillPortion(15))
            .padding(spacing::XXS),
        );

    Container::new(row)
        .style(styles::container::table_row(index % 2 == 1))
        .into()
}

fn unsubscribed_table<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("dashboard-unsubscribed-title")).size(typography::SUBTITLE);

    let header = header_row(vec![
        header_cell(ctx.i18n.tr("column-group"), 30),
        header_cell(ctx.i18n.tr("column-description"), 45),
        header_cell(ctx.i18n.tr("column-action"), 25),
    ]);

    let rows = ctx
        .state
        .filtered_unsubscribed()
        .into_iter()
        .enumerate()
        .map(|(index, group)| {
            let send = button(
                Row::new()
                    .spacing(spacing::XXS)
                    .align_y(Vertical::Center)
                    .push(icons::sized(
                        icons::tinted(icons::send(), crate::ui::design_tokens::palette::WHITE),
                        sizing::ICON_SM,
                    ))
                    .push(Text::new(ctx.i18n.tr("dashboard-send-request")).size(typography::BODY)),
            )
            .on_press(Message::RequestSubscription(group.id))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::button::primary);

            let row = Row::new()
                .align_y(Vertical::Center)
                .push(
                    Container::new(Text::new(group.name.clone()).size(typography::BODY))
                        .width(Length::FillPortion(30))
                        .padding(spacing::XXS),
                )
                .push(
                    Container::new(Text::new(group.description.as_str()).size(typography::BODY))
                        .width(Length::FillPortion(45))
                        .padding(spacing::XXS),
                )
                .push(
                    Container::new(send)
                        .width(Length::FillPortion(25))
                        .padding(spacing::XXS),
                );

            Container::new(row)
                .style(styles::container::table_row(index % 2 == 1))
                .into()
        })
        .collect();

    Column::new()
        .spacing(spacing::XS)
        .push(title)
        .push(header)
        .push(body(rows, ctx.i18n.tr("dashboard-unsubscribed-empty")))
        .into()
}

fn pending_table<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("dashboard-pending-title")).size(typography::SUBTITLE);

    let header = header_row(vec![
        header_cell(ctx.i18n.tr("column-group"), 30),
        header_cell(ctx.i18n.tr("column-description"), 30),
        header_cell(ctx.i18n.tr("column-status"), 20),
        header_cell(ctx.i18n.tr("column-admin-action"), 20),
    ]);

    let rows = ctx
        .state
        .filtered_pending()
        .into_iter()
        .enumerate()
        .map(|(index, group)| {
            let approve = button(
                Row::new()
                    .spacing(spacing::XXS)
                    .align_y(Vertical::Center)
                    .push(icons::sized(
                        icons::tinted(icons::check(), crate::ui::design_tokens::palette::WHITE),
                        sizing::ICON_SM,
                    ))
                    .push(Text::new(ctx.i18n.tr("dashboard-test-approval")).size(typography::BODY)),
            )
            .on_press(Message::ApprovePending(group.id))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::button::success);

            let row = Row::new()
                .align_y(Vertical::Center)
                .push(
                    Container::new(Text::new(group.name.clone()).size(typography::BODY))
                        .width(Length::FillPortion(30))
                        .padding(spacing::XXS),
                )
                .push(
                    Container::new(Text::new(group.description.as_str()).size(typography::BODY))
                        .width(Length::FillPortion(30))
                        .padding(spacing::XXS),
                )
                .push(
                    Container::new(status_tag::view(
                        ctx.i18n.tr(group.status.i18n_key()),
                        group.status.i18n_key(),
                    ))
                    .width(Length::FillPortion(20))
                    .padding(spacing::XXS),
                )
                .push(
                    Container::new(approve)
                        .width(Length::FillPortion(20))
                        .padding(spacing::XXS),
                );

            Container::new(row)
                .style(styles::container::table_row(index % 2 == 1))
                .into()
        })
        .collect();

    Column::new()
        .spacing(spacing::XS)
        .push(title)
        .push(header)
        .push(body(rows, ctx.i18n.tr("dashboard-pending-empty")))
        .into()
}

fn notice_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let notices = ctx.state.filtered_notices();

    let header = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(icons::sized(icons::themed(icons::bell()), sizing::ICON_MD))
        .push(
            Text::new(format!(
                "{} ({})",
                ctx.i18n.tr("notices-title"),
                notices.len()
            ))
            .size(typography::SUBTITLE),
        );

    let mut list = Column::new().spacing(spacing::XS);
    if notices.is_empty() {
        list = list.push(empty_state::view(ctx.i18n.tr("notices-empty")));
    } else {
        for notice in notices {
            let entry = button(
                Column::new()
                    .push(Text::new(notice.group.clone()).size(typography::BODY))
                    .push(Text::new(notice.message.as_str()).size(typography::CAPTION)),
            )
            .on_press(Message::NoticeOpened)
            .padding(spacing::XS)
            .width(Length::Fill)
            .style(styles::button::subtle);
            list = list.push(entry);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn state() -> State {
        let catalog = Catalog::generate();
        State::new(
            catalog.subscribed_groups,
            catalog.unsubscribed_groups,
            catalog.group_notices,
        )
    }

    #[test]
    fn dashboard_view_renders_every_tab() {
        let i18n = I18n::default();
        let mut state = state();
        for tab in [Tab::Subscribed, Tab::Unsubscribed, Tab::Pending] {
            state.select_tab(tab);
            let _element = view(ViewContext {
                i18n: &i18n,
                state: &state,
                show_notifications: false,
            });
        }
    }

    #[test]
    fn dashboard_view_renders_with_notice_panel() {
        let i18n = I18n::default();
        let state = state();
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
            show_notifications: true,
        });
    }
}
