use crate::prelude::TableConfig;

/// Body text plus the number of line breaks it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineLayout {
    pub body: String,
    pub breaks: usize,
}

/// Joins samples with `,` and breaks with `,\n` after every `values_per_line`
/// values. A value that opens a line gets no leading separator.
///
/// The break is skipped only for index `period - 1`, which lies outside the
/// sampled span, so the last value is followed by `,\n` as well.
pub fn layout(config: &TableConfig, samples: &[i32]) -> LineLayout {
    let last_index = config.period.saturating_sub(1);
    let (body, _, breaks) = samples.iter().enumerate().fold(
        (String::new(), 0usize, 0usize),
        |(mut body, on_line, breaks), (position, sample)| {
            if on_line > 0 {
                body.push(',');
            }
            body.push_str(&sample.to_string());

            let on_line = on_line + 1;
            let index = config.start + position;
            if on_line >= config.values_per_line && index < last_index {
                body.push_str(",\n");
                (body, 0, breaks + 1)
            } else {
                (body, on_line, breaks)
            }
        },
    );
    LineLayout { body, breaks }
}
