// src/features/forms.rs  -  Simulated form submission (validate, alert, reset, remember)
use super::{Component, Context, Event};
use crate::dom::{Document, ElementId, Patch};
use crate::forms::Submission;
use std::marker::PhantomData;

pub struct FormComponent<S> {
    form_id:  &'static str,
    alert_id: &'static str,
    form:     Option<ElementId>,
    alert:    Option<ElementId>,
    _kind:    PhantomData<S>,
}

impl<S: Submission> FormComponent<S> {
    pub fn new(form_id: &'static str, alert_id: &'static str) -> Self {
        Self { form_id, alert_id, form: None, alert: None, _kind: PhantomData }
    }

    fn submit(&self, form: ElementId, alert: ElementId, cx: &mut Context<'_>) -> Vec<Patch> {
        let mut out = vec![
            Patch::remove_class(alert, "show"),
            Patch::remove_class(alert, "success"),
            Patch::remove_class(alert, "error"),
            Patch::text(alert, ""),
        ];
        let req = S::read(cx.doc);

        if let Err(err) = req.validate() {
            log::debug!("[{}] rejected: {err}", self.form_id);
            out.push(Patch::text(alert, cx.sync.message(S::message_key(err))));
            out.push(Patch::add_class(alert, "show"));
            out.push(Patch::add_class(alert, "error"));
            return out;
        }

        out.push(Patch::text(alert, cx.sync.message(S::SUCCESS_KEY)));
        out.push(Patch::add_class(alert, "show"));
        out.push(Patch::add_class(alert, "success"));
        match serde_json::to_string(&req) {
            Ok(payload) => log::info!("{} (Sent): {payload}", S::LABEL),
            Err(e)      => log::warn!("{} (Sent), payload not serializable: {e}", S::LABEL),
        }

        out.push(Patch::ResetForm { form });
        req.remember(&mut *cx.store);
        cx.timers.schedule(
            cx.settings.alert_dismiss,
            "alert dismiss",
            vec![Patch::remove_class(alert, "show")],
        );
        out
    }
}

impl<S: Submission> Component for FormComponent<S> {
    fn name(&self) -> &'static str { self.form_id }

    fn activate(&mut self, doc: &Document) -> bool {
        self.form  = doc.by_id(self.form_id);
        self.alert = doc.by_id(self.alert_id);
        self.form.is_some() && self.alert.is_some()
    }

    fn handle(&mut self, event: &Event, cx: &mut Context<'_>) -> Vec<Patch> {
        let (Some(form), Some(alert)) = (self.form, self.alert) else { return Vec::new() };
        match event {
            Event::Submit { form: f } if *f == form => {
                cx.prevent_default();
                self.submit(form, alert, cx)
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::features::Event;
    use crate::forms::{FeedbackRequest, WholesaleRequest};
    use crate::pages;
    use crate::site::Site;
    use crate::store::{self, MemoryStore};
    use std::time::Duration;

    fn contact() -> Site {
        Site::boot(pages::contact("contact.html"), Box::new(MemoryStore::new()), Default::default())
    }

    fn alert(s: &Site, id: &str) -> (String, bool, bool, bool) {
        let d = s.document();
        let a = d.by_id(id).unwrap();
        (
            d.get(a).unwrap().text_content(),
            d.has_class(a, "show"),
            d.has_class(a, "success"),
            d.has_class(a, "error"),
        )
    }

    fn fill_wholesale(s: &mut Site) {
        s.input("clientType", "retailer");
        s.input("productSelect", "product_flow");
        s.input("quantity", "10");
        s.input("contactName", "X");
        s.input("email", "x@y.com");
        s.input("phone", "01012345678");
    }

    #[test]
    fn failed_submit_shows_error_and_keeps_fields() {
        let mut s = contact();
        fill_wholesale(&mut s);
        s.input("quantity", "9");
        assert!(s.submit_id("wholesaleForm"));

        let (text, show, ok, err) = alert(&s, "formAlertWholesale");
        assert!(text.starts_with("❗"), "{text}");
        assert!(show && err && !ok);
        assert_eq!(s.document().field("contactName"), "X");
        assert_eq!(s.store().get(store::KEY_CONTACT_NAME), None);
    }

    #[test]
    fn zero_or_text_quantity_gets_quantity_message_not_missing() {
        let mut s = contact();
        s.click_id("langBtn");
        for q in ["0", "abc"] {
            fill_wholesale(&mut s);
            s.input("quantity", q);
            s.submit_id("wholesaleForm");
            let (text, _, _, err) = alert(&s, "formAlertWholesale");
            assert!(err, "{q}");
            assert!(text.starts_with("❗ Quantity must be a number"), "{q}: {text}");
        }

        fill_wholesale(&mut s);
        s.input("quantity", "");
        s.submit_id("wholesaleForm");
        assert!(alert(&s, "formAlertWholesale").0.starts_with("⚠ Please fill in all required fields"));
    }

    #[test]
    fn error_then_success_clears_error_class() {
        let mut s = contact();
        s.submit_id("wholesaleForm");
        assert!(alert(&s, "formAlertWholesale").3);
        fill_wholesale(&mut s);
        s.submit_id("wholesaleForm");
        let (_, show, ok, err) = alert(&s, "formAlertWholesale");
        assert!(show && ok && !err);
    }

    #[test]
    fn messages_follow_active_language() {
        let mut s = contact();
        s.submit_id("wholesaleForm");
        assert!(alert(&s, "formAlertWholesale").0.contains("الرجاء"));
        s.click_id("langBtn");
        s.submit_id("wholesaleForm");
        assert!(alert(&s, "formAlertWholesale").0.contains("Please fill in all required fields"));
    }

    #[test]
    fn success_alert_dismisses_after_delay() {
        let mut s = contact();
        fill_wholesale(&mut s);
        s.submit_id("wholesaleForm");
        assert!(alert(&s, "formAlertWholesale").1);
        s.advance(Duration::from_millis(7_999));
        assert!(alert(&s, "formAlertWholesale").1);
        s.advance(Duration::from_millis(8_000));
        let (_, show, ok, _) = alert(&s, "formAlertWholesale");
        assert!(!show && ok);
    }

    #[test]
    fn feedback_uses_unified_missing_message_and_stores_nothing() {
        let mut s = contact();
        s.click_id("langBtn");
        s.submit_id("feedbackForm");
        assert_eq!(
            alert(&s, "formAlertFeedback").0,
            "⚠ Please fill in the required fields (Type, Details, Name, and Email)."
        );

        s.input("feedbackType", "inquiry");
        s.input("details", "Do you ship to Alexandria?");
        s.input("feedbackName", "Omar");
        s.input("feedbackEmail", "omar@example.com");
        s.submit_id("feedbackForm");
        let (text, show, ok, _) = alert(&s, "formAlertFeedback");
        assert!(text.starts_with("✅ Your request was sent successfully!"));
        assert!(show && ok);
        assert_eq!(s.document().field("details"), "");
        assert_eq!(s.store().get(store::KEY_CONTACT_NAME), None);
    }

    #[test]
    fn feedback_alert_dismisses_after_delay() {
        let mut s = contact();
        s.input("feedbackType", "complaint");
        s.input("details", "Late delivery");
        s.input("feedbackName", "Mona");
        s.input("feedbackEmail", "mona@example.com");
        s.submit_id("feedbackForm");
        assert!(alert(&s, "formAlertFeedback").1);
        s.advance(Duration::from_millis(7_999));
        assert!(alert(&s, "formAlertFeedback").1);
        s.advance(Duration::from_secs(8));
        let (_, show, ok, _) = alert(&s, "formAlertFeedback");
        assert!(!show && ok);
    }

    #[test]
    fn submission_types_are_wired_to_their_forms() {
        let s = contact();
        let names: Vec<&str> = s.components().collect();
        assert!(names.contains(&"wholesaleForm"));
        assert!(names.contains(&"feedbackForm"));
        // Both request types read the contact page without panicking.
        let _ = <WholesaleRequest as crate::forms::Submission>::read(s.document());
        let _ = <FeedbackRequest as crate::forms::Submission>::read(s.document());
    }

    #[test]
    fn submit_events_for_other_forms_are_ignored() {
        let mut s = contact();
        let feedback = s.document().by_id("feedbackForm").unwrap();
        s.dispatch(Event::Submit { form: feedback });
        assert!(!alert(&s, "formAlertWholesale").1);
    }
}
