use super::*;

/// Tests a player declining the offer.
///
/// Expected: Declined, decline notice in the DM channel, no role change or announcement
#[tokio::test]
async fn decline_notifies_player() {
    let platform = vikings_platform(3).with_responses(&[OfferResponse::Decline]);

    let machine = OfferLifecycle::new(&platform).run(offer_for("Vikings")).await;

    assert_eq!(machine.state(), &OfferState::Declined);
    assert_eq!(machine.outcome(), OfferOutcome::Declined);
    assert_eq!(
        platform.calls().last(),
        Some(&Call::NotifyPlayer {
            dm_channel_id: DM_CHANNEL_ID,
            content: DECLINED_NOTICE.to_string()
        })
    );
    assert_eq!(
        platform.count_calls(|call| matches!(call, Call::AddTeamRole { .. })),
        0
    );
    assert!(platform.announcements().is_empty());
}
