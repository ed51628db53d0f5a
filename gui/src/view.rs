use crate::word_cloud::top_words;
use crate::{ErrorNotice, Message, Tab, UserReport};
use chrono::{DateTime, Utc};
use comment_stats::AnalysisResult;
use iced::widget::{button, container, progress_bar, row, scrollable, text, text_input, Column};
use iced::{theme, Alignment, Color, Element, Length, Theme};
use snooscope_core::Comment;

pub fn app_view<'a>(
    username: &'a str,
    loading: bool,
    report: Option<&'a UserReport>,
    error: Option<&'a ErrorNotice>,
    active_tab: Tab,
) -> Element<'a, Message, Theme> {
    let header = text("Reddit User Analyzer").size(32);

    let input_row = row![
        text_input("Enter Reddit username", username)
            .on_input(Message::UsernameChanged)
            .on_submit(Message::Analyze)
            .padding(8),
        button("Analyze").on_press(Message::Analyze).padding(8),
    ]
    .spacing(10)
    .align_items(Alignment::Center);

    let mut page = Column::new().spacing(20).push(header).push(input_row);

    if loading {
        page = page.push(text("Fetching and analyzing data...").size(16));
    }

    if let Some(notice) = error {
        page = page.push(
            text(format!("[{}] {}", notice.code, notice.message))
                .size(16)
                .style(theme::Text::Color(Color::from_rgb(0.8, 0.2, 0.2))),
        );
    }

    if let Some(report) = report {
        page = page
            .push(text(format!("Analysis for u/{}", report.username)).size(24))
            .push(tab_row(active_tab))
            .push(match active_tab {
                Tab::Overview => overview_tab(report),
                Tab::Comments => comments_tab(report),
            });
    }

    container(scrollable(page))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(20)
        .into()
}

fn tab_row<'a>(active_tab: Tab) -> Element<'a, Message, Theme> {
    let tab_button = |label: &str, tab: Tab| {
        let style = if tab == active_tab {
            theme::Button::Primary
        } else {
            theme::Button::Secondary
        };
        button(text(label.to_string()))
            .on_press(Message::TabSelected(tab))
            .style(style)
            .padding(8)
    };

    row![
        tab_button("Overview", Tab::Overview),
        tab_button("Comments and Posts", Tab::Comments),
    ]
    .spacing(10)
    .into()
}

fn overview_tab<'a>(report: &'a UserReport) -> Element<'a, Message, Theme> {
    let analysis = &report.analysis;

    Column::new()
        .spacing(20)
        .push(metric_row(analysis))
        .push(section(
            "Top 10 Subreddits by Comment Count",
            count_chart(analysis),
        ))
        .push(section("Top 10 Subreddits by Karma", karma_chart(analysis)))
        .push(section("Activity by Hour of Day", hour_chart(analysis)))
        .push(section("Activity by Day of Week", day_chart(analysis)))
        .push(section("Additional Insights", insights(analysis)))
        .push(section(
            "Most Upvoted Comment",
            extremal_card(analysis.most_upvoted.as_ref()),
        ))
        .push(section(
            "Most Downvoted Comment",
            extremal_card(analysis.most_downvoted.as_ref()),
        ))
        .push(section(
            "Word Cloud of Comments",
            word_list(analysis.body_blob.as_deref()),
        ))
        .into()
}

fn comments_tab<'a>(report: &'a UserReport) -> Element<'a, Message, Theme> {
    let mut feed = Column::new()
        .spacing(10)
        .push(text("All Comments and Posts").size(20));
    for comment in &report.comments {
        feed = feed.push(comment_card(comment));
    }
    feed.into()
}

fn section<'a>(title: &str, body: Element<'a, Message, Theme>) -> Element<'a, Message, Theme> {
    Column::new()
        .spacing(8)
        .push(text(title.to_string()).size(20))
        .push(body)
        .into()
}

fn metric_row<'a>(analysis: &AnalysisResult) -> Element<'a, Message, Theme> {
    row![
        metric("Total Comments", analysis.total_comments.to_string()),
        metric(
            "Total Karma",
            analysis
                .total_karma
                .map(|karma| karma.to_string())
                .unwrap_or_else(|| "No data".to_string()),
        ),
        metric(
            "Average Karma per Comment",
            analysis
                .average_karma
                .map(|avg| format!("{avg:.2}"))
                .unwrap_or_else(|| "No data".to_string()),
        ),
    ]
    .spacing(30)
    .into()
}

fn metric<'a>(label: &str, value: String) -> Element<'a, Message, Theme> {
    container(
        Column::new()
            .spacing(5)
            .push(text(value).size(28))
            .push(text(label.to_string()).size(12)),
    )
    .padding(10)
    .into()
}

fn count_chart<'a>(analysis: &AnalysisResult) -> Element<'a, Message, Theme> {
    match &analysis.top_subreddits_by_count {
        Some(table) => bar_rows(
            table
                .iter()
                .map(|entry| {
                    (
                        format!("r/{}", entry.subreddit),
                        entry.comments as f32,
                        entry.comments.to_string(),
                    )
                })
                .collect(),
        ),
        None => no_data(),
    }
}

fn karma_chart<'a>(analysis: &AnalysisResult) -> Element<'a, Message, Theme> {
    match &analysis.top_subreddits_by_karma {
        Some(table) => bar_rows(
            table
                .iter()
                .map(|entry| {
                    (
                        format!("r/{}", entry.subreddit),
                        entry.karma as f32,
                        entry.karma.to_string(),
                    )
                })
                .collect(),
        ),
        None => no_data(),
    }
}

fn hour_chart<'a>(analysis: &AnalysisResult) -> Element<'a, Message, Theme> {
    match &analysis.activity_by_hour {
        Some(buckets) => bar_rows(
            buckets
                .iter()
                .map(|bucket| {
                    (
                        format!("{:02}:00", bucket.hour),
                        bucket.comments as f32,
                        bucket.comments.to_string(),
                    )
                })
                .collect(),
        ),
        None => no_data(),
    }
}

fn day_chart<'a>(analysis: &AnalysisResult) -> Element<'a, Message, Theme> {
    match &analysis.activity_by_day {
        Some(buckets) => bar_rows(
            buckets
                .iter()
                .map(|bucket| {
                    (
                        bucket.day_name().to_string(),
                        bucket.comments as f32,
                        bucket.comments.to_string(),
                    )
                })
                .collect(),
        ),
        None => no_data(),
    }
}

/// Horizontal bars scaled against the largest value in the group. Negative
/// karma renders as an empty bar; the numeric column still shows the sign.
fn bar_rows<'a>(rows: Vec<(String, f32, String)>) -> Element<'a, Message, Theme> {
    let max = rows
        .iter()
        .map(|(_, value, _)| *value)
        .fold(0.0f32, f32::max)
        .max(1.0);

    let mut list = Column::new().spacing(6);
    for (label, value, display) in rows {
        list = list.push(
            row![
                text(label).size(14).width(Length::Fixed(160.0)),
                progress_bar(0.0..=max, value.max(0.0)).height(Length::Fixed(14.0)),
                text(display).size(14).width(Length::Fixed(70.0)),
            ]
            .spacing(10)
            .align_items(Alignment::Center),
        );
    }
    list.into()
}

fn insights<'a>(analysis: &AnalysisResult) -> Element<'a, Message, Theme> {
    Column::new()
        .spacing(5)
        .push(insight_line(
            "Average comment length",
            analysis
                .average_body_chars
                .map(|chars| format!("{chars:.1} characters")),
        ))
        .push(insight_line(
            "First comment date",
            analysis.first_comment.map(format_date),
        ))
        .push(insight_line(
            "Last comment date",
            analysis.last_comment.map(format_date),
        ))
        .push(insight_line(
            "Comments per day",
            analysis.comments_per_day.map(|rate| format!("{rate:.2}")),
        ))
        .into()
}

fn insight_line<'a>(label: &str, value: Option<String>) -> Element<'a, Message, Theme> {
    let value = value.unwrap_or_else(|| "No data found".to_string());
    text(format!("{label}: {value}")).size(14).into()
}

fn extremal_card<'a>(comment: Option<&'a Comment>) -> Element<'a, Message, Theme> {
    match comment {
        Some(comment) => comment_card(comment),
        None => no_data(),
    }
}

fn comment_card<'a>(comment: &'a Comment) -> Element<'a, Message, Theme> {
    let mut card = Column::new()
        .spacing(5)
        .push(
            text(format!(
                "r/{}",
                comment.subreddit.as_deref().unwrap_or("unknown")
            ))
            .size(14),
        )
        .push(
            text(format!(
                "Score: {}",
                comment
                    .score
                    .map(|score| score.to_string())
                    .unwrap_or_else(|| "No data".to_string())
            ))
            .size(14),
        );

    if let Some(body) = comment.body.as_deref() {
        card = card.push(text(body.to_string()).size(14));
    }
    if let Some(link) = comment.full_permalink() {
        card = card.push(text(link).size(12));
    }

    container(card)
        .padding(10)
        .width(Length::Fill)
        .style(theme::Container::Box)
        .into()
}

fn word_list<'a>(blob: Option<&str>) -> Element<'a, Message, Theme> {
    let Some(blob) = blob else {
        return no_data();
    };

    let words = top_words(blob, 20);
    let Some(most_frequent) = words.first().map(|entry| entry.count.max(1)) else {
        return no_data();
    };

    let mut list = Column::new().spacing(4);
    for entry in words {
        let size = 13.0 + 15.0 * (entry.count as f32 / most_frequent as f32);
        list = list.push(text(format!("{} ({})", entry.word, entry.count)).size(size));
    }
    list.into()
}

fn no_data<'a>() -> Element<'a, Message, Theme> {
    text("No data found.").size(14).into()
}

fn format_date(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d %H:%M UTC").to_string()
}
