//! Role specializations
//!
//! Each specialist role is a strategy object implementing
//! [`RoleSpecialization`]. [`specialization`] maps the closed
//! [`SpecialistRole`] enum onto them, so adding a role is a compile error
//! until its block exists.

use crate::orchestration::CouncilMode;
use crate::panel::SpecialistRole;

/// What a role cares about, ignores, and must always mention.
pub trait RoleSpecialization: Send + Sync {
    /// Specialization block appended after the mode-common block.
    fn specialize(&self, mode: CouncilMode) -> &'static str;

    /// Payload fields this role must reference in its reasoning.
    fn must_mention(&self) -> &'static [&'static str];

    /// Closing line of the specialization block, built from [`Self::must_mention`].
    fn must_mention_line(&self) -> String {
        let fields: Vec<String> = self
            .must_mention()
            .iter()
            .map(|field| format!("`{}`", field))
            .collect();
        format!("You must mention: {}.", fields.join(", "))
    }
}

pub struct OfferIqSpecialization;
pub struct CreativeSpecialization;
pub struct ShopperSpecialization;
pub struct RetailSpecialization;

static OFFER_IQ: OfferIqSpecialization = OfferIqSpecialization;
static CREATIVE: CreativeSpecialization = CreativeSpecialization;
static SHOPPER: ShopperSpecialization = ShopperSpecialization;
static RETAIL: RetailSpecialization = RetailSpecialization;

/// Registry lookup: the specialization for `role`.
pub fn specialization(role: SpecialistRole) -> &'static dyn RoleSpecialization {
    match role {
        SpecialistRole::OfferIq => &OFFER_IQ,
        SpecialistRole::Creative => &CREATIVE,
        SpecialistRole::Shopper => &SHOPPER,
        SpecialistRole::Retail => &RETAIL,
    }
}

impl RoleSpecialization for OfferIqSpecialization {
    fn specialize(&self, mode: CouncilMode) -> &'static str {
        match mode {
            CouncilMode::Evaluation => {
                r#"## Specialization: OfferIQ (value architecture)

You care about: the base value and whether it is worth the entry threshold, prize tier balance, perceived value versus real cost, and whether the prize pool can carry the promised cadence.
You ignore: copywriting, visual identity, store execution.
If `meta.prize_pool_value` is unknown, say so.
Judge `scale_zone` by how far the value structure departs from a normal promotion in this category."#
            }
            CouncilMode::Improvement => {
                r#"## Specialization: OfferIQ (offer tuning)

Propose up to three offer-tuning options. Each option is a concrete edit of `offer_state`.

Role-specific JSON fields:

{
  "options": [
    {
      "label": "1",
      "summary": "what changes",
      "scale_zone": "ZONE_1_NORMAL" | "ZONE_2_BRAVE" | "ZONE_3_BREAKS_SYSTEM" | "NOT_APPLICABLE",
      "patch": {
        "base_value": {"kind": "none" | "cashback" | "voucher" | "gift", "amount": 0},
        "entry_threshold": {"kind": "units" | "spend" | "visits", "value": 0},
        "major_prizes": ["..."],
        "runner_up_prizes": ["..."],
        "has_guaranteed_reward": true
      }
    }
  ],
  "recommended_option": "label"
}

Omit patch fields you do not change. If the offer already has a guaranteed reward, you may change its amount but never add a second guaranteed value type."#
            }
        }
    }

    fn must_mention(&self) -> &'static [&'static str] {
        &["meta.prize_pool_value", "offer_state.has_guaranteed_reward"]
    }
}

impl RoleSpecialization for CreativeSpecialization {
    fn specialize(&self, mode: CouncilMode) -> &'static str {
        match mode {
            CouncilMode::Evaluation => {
                r#"## Specialization: Creative (hook and story)

You care about: whether the concept has a single repeatable hook, whether the story makes the prize feel bigger than its cost, and whether the idea is ownable by this brand.
You ignore: prize economics, store logistics, entry mechanics.
Restate the `concept` in your own words in `headline` or `key_points`.
`cadence_label` should echo `meta.cadence_label` unless the story implies something else."#
            }
            CouncilMode::Improvement => {
                r#"## Specialization: Creative (hook and story tuning)

Sharpen the hook and the story device. Keep any existing story device unless you set `drop_signature`.

Role-specific JSON fields:

{
  "hooks": [{"line": "the hook line", "rationale": "why it works"}],
  "story_device": "the story device to build around, or null"
}

Offer at most three hooks. Do not touch value, prizes or thresholds."#
            }
        }
    }

    fn must_mention(&self) -> &'static [&'static str] {
        &["concept"]
    }
}

impl RoleSpecialization for ShopperSpecialization {
    fn specialize(&self, mode: CouncilMode) -> &'static str {
        match mode {
            CouncilMode::Evaluation => {
                r#"## Specialization: Shopper (behaviour and mechanic)

You care about: entry friction, perceived odds of winning, how often a shopper sees someone like them win, and whether the mechanic is explainable in one breath.
You ignore: brand tone, trade margins.
Say what `meta.cadence_label` feels like to a shopper. When `meta.total_prizes` and `meta.duration_days` are both known, state winners per day.
Set `cadence_label` from your reading of the mechanic."#
            }
            CouncilMode::Improvement => {
                r#"## Specialization: Shopper (mechanic simplification)

Remove steps between the shopper and the reward.

Role-specific JSON fields:

{
  "simplifications": ["..."],
  "steps_before": 0,
  "steps_after": 0,
  "suggested_cadence": "one of the cadence labels"
}

Do not change value or prizes; describe mechanic changes only."#
            }
        }
    }

    fn must_mention(&self) -> &'static [&'static str] {
        &["meta.cadence_label"]
    }
}

impl RoleSpecialization for RetailSpecialization {
    fn specialize(&self, mode: CouncilMode) -> &'static str {
        match mode {
            CouncilMode::Evaluation => {
                r#"## Specialization: Retail (trade and operations)

You care about: whether retailers will list and display it, point-of-sale needs, stock depth against `meta.expected_entries`, fulfilment of the base value, and staff burden at the till.
You ignore: creative quality, prize glamour.
Say whether stores can verify `offer_state.entry_threshold`."#
            }
            CouncilMode::Improvement => {
                r#"## Specialization: Retail (retailer and trade tuning)

Make the offer easier to sell in and execute.

Role-specific JSON fields:

{
  "trade_actions": ["..."],
  "pos_requirements": ["..."],
  "retailer_risks": ["..."]
}

Do not change value, prizes or the story."#
            }
        }
    }

    fn must_mention(&self) -> &'static [&'static str] {
        &["offer_state.entry_threshold"]
    }
}
