//! The per-card review loop.
//!
//! Each card moves from presented to exactly one terminal state: deleted, or
//! kept with zero or more labels added and at most one list move. Remote
//! failures at any step propagate and abort the run; nothing is retried or
//! rolled back.

use crate::display::{self, Theme};
use crate::prompts::Prompter;
use chrono::Utc;
use gtd_core::trello::{BoardApi, BoardList, Card, Label};
use gtd_core::GtdError;
use std::io::{BufRead, Write};

/// Terminal state of one reviewed card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewOutcome {
    Deleted,
    Kept {
        labels_added: usize,
        moved_to: Option<String>,
    },
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReviewSummary {
    pub reviewed: usize,
    pub kept: usize,
    pub deleted: usize,
}

pub struct ReviewSession<'a, A, R, W> {
    api: &'a A,
    theme: &'a Theme,
    prompter: Prompter<R, W>,
}

impl<'a, A: BoardApi, R: BufRead, W: Write> ReviewSession<'a, A, R, W> {
    pub fn new(api: &'a A, theme: &'a Theme, input: R, output: W) -> Self {
        Self {
            api,
            theme,
            prompter: Prompter::new(input, output),
        }
    }

    /// Review every card in sequence.
    pub async fn run(
        &mut self,
        labels: &[Label],
        lists: &[BoardList],
        inbound: &BoardList,
        cards: &[Card],
    ) -> Result<ReviewSummary, GtdError> {
        let mut summary = ReviewSummary::default();
        for card in cards {
            let outcome = self.review_card(card, labels, lists, inbound).await?;
            summary.reviewed += 1;
            match outcome {
                ReviewOutcome::Deleted => summary.deleted += 1,
                ReviewOutcome::Kept { .. } => summary.kept += 1,
            }
        }
        Ok(summary)
    }

    async fn review_card(
        &mut self,
        card: &Card,
        labels: &[Label],
        lists: &[BoardList],
        inbound: &BoardList,
    ) -> Result<ReviewOutcome, GtdError> {
        let attachments = self.api.attachments(&card.id).await?;
        display::print_card(
            self.prompter.output_mut(),
            self.theme,
            card,
            &attachments,
            Utc::now(),
        )?;

        if !self.prompter.confirm("Should we keep it? (Y/n)", true)? {
            self.api.delete_card(&card.id).await?;
            log::info!("Deleted card '{}'", card.name);
            return Ok(ReviewOutcome::Deleted);
        }

        let labels_added = self.add_labels(card, labels).await?;
        let moved_to = self.choose_destination(card, lists, inbound).await?;
        Ok(ReviewOutcome::Kept {
            labels_added,
            moved_to,
        })
    }

    /// Optionally apply board labels to the card. Each chosen label is sent
    /// immediately; the choice loop repeats until the user confirms done.
    async fn add_labels(&mut self, card: &Card, labels: &[Label]) -> Result<usize, GtdError> {
        if labels.is_empty() {
            return Ok(0);
        }
        if !self
            .prompter
            .confirm("Would you like to add labels? (y/N)", false)?
        {
            log::info!("No labels added");
            return Ok(0);
        }

        let names: Vec<&str> = labels.iter().map(|l| l.name.as_str()).collect();
        let mut added = 0;
        loop {
            for index in self.prompter.choose(&names)? {
                let label = &labels[index];
                self.api.add_label(&card.id, &label.id).await?;
                log::info!("Added label '{}' to '{}'", label.name, card.name);
                added += 1;
            }
            if self
                .prompter
                .confirm("Are you done adding labels? (Y/n)", true)?
            {
                return Ok(added);
            }
        }
    }

    /// Pick exactly one destination among the open lists. Choosing the list
    /// the card is already in means no move.
    async fn choose_destination(
        &mut self,
        card: &Card,
        lists: &[BoardList],
        inbound: &BoardList,
    ) -> Result<Option<String>, GtdError> {
        writeln!(self.prompter.output_mut(), "Pick a list for this card:")?;
        let names: Vec<&str> = lists.iter().map(|l| l.name.as_str()).collect();
        let index = self.prompter.choose_one(&names)?;
        let destination = &lists[index];

        if destination.id == inbound.id {
            log::info!("Did not want to move");
            writeln!(self.prompter.output_mut(), "Staying in {}", inbound.name)?;
            return Ok(None);
        }

        self.api.move_card(&card.id, &destination.id).await?;
        writeln!(self.prompter.output_mut(), "Moved to {}", destination.name)?;
        Ok(Some(destination.name.clone()))
    }
}
