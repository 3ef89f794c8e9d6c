//! Bodies for treatment and city landing pages.

use rand::seq::SliceRandom;

use super::phrases::{
    BANGALORE_OPENERS, CITY_CTAS, CITY_HOOKS, CITY_REASONS, CITY_STORIES, CITY_STORY_NAMES,
    DISTANCE_REMARKS, GETTING_STARTED, JOURNEY_REMARKS, PRICE_OPENERS, QUALITY_ANSWERS,
    QUALITY_OPENERS, SAVINGS_REMARKS, TRACK_RECORD, TREATMENT_CTAS, TREATMENT_HOOKS,
    TREATMENT_REASONS, TREATMENT_TESTIMONIALS,
};
use super::{ContentGenerator, PageContext, average_savings, format_usd, format_usd_range};

pub(super) fn render_treatment(
    generator: &mut ContentGenerator<'_>,
    context: &PageContext<'_>,
) -> String {
    let city = &context.city;
    let flight = &context.flight_hours;
    let name = context.treatment_name();
    let treatment = &context.treatment;
    let gcc = format_usd_range(treatment.cost_gcc);
    let india = format_usd_range(treatment.cost_india);
    let savings = &treatment.savings_percent;
    let total = format_usd(average_savings(treatment));
    let (whatsapp, email) = generator.brand_contacts();

    let hook = generator.phrase(&TREATMENT_HOOKS, context);
    let reasons = generator.phrase(&TREATMENT_REASONS, context);
    let remark = generator.phrase(&SAVINGS_REMARKS, context);
    let quality = generator.phrase(&QUALITY_OPENERS, context);

    let mut hospitals = String::new();
    for (index, hospital) in generator.hospitals(name).into_iter().enumerate() {
        hospitals.push_str(&format!("\n**{}. {}**\n", index + 1, hospital.name));
        if let Some(established) = hospital.established {
            hospitals.push_str(&format!("- Established: {established}\n"));
        }
        if let Some(doctors) = hospital.doctors {
            hospitals.push_str(&format!("- {doctors}+ specialist doctors\n"));
        }
        hospitals.push_str(
            "- JCI Accredited\n- Arabic-speaking coordinators available\n- International patient department\n",
        );
    }

    let journey = generator.phrase(&JOURNEY_REMARKS, context);
    let months = generator.between(3, 15);
    let testimonial = generator
        .phrase(&TREATMENT_TESTIMONIALS, context)
        .replace("{months}", &months.to_string());
    let cta = generator.phrase(&TREATMENT_CTAS, context);
    let updated = generator.last_updated();

    format!(
        "# {name} in India for {city} Patients

{hook}

## Why {city} Patients Choose India

{reasons}

### Cost Comparison: {city} vs Bangalore

| Item | {city}/GCC | Bangalore, India | You Save |
|------|----------------|------------------|----------|
| {name} | {gcc} | {india} | **{savings}** |
| Hospital Stay (per day) | $800-1,200 | $150-300 | ~75% |
| Follow-up Visits | $200-400 | $40-80 | ~80% |
| **Total Average Savings** | - | - | **{total}+** |

*Costs include procedure, hospital stay, and immediate post-op care. Add ~$1,500-2,500 for flights and accommodation.*

{remark}

### What About Quality?

{quality}

**Top Hospitals for {name}:**
{hospitals}

### Complete Journey from {city}

**Before You Leave:**
1. Free medical consultation (share reports via WhatsApp)
2. Treatment plan and cost estimate (within 24 hours)
3. Medical visa assistance
4. Flight and hotel booking support

**In Bangalore ({flight} hour flight):**
- Day 1-2: Arrival, rest, pre-surgery consultations
- Day 3-4: Procedure and immediate recovery
- Day 5-10: Post-op care and monitoring
- Day 11-14: Final checkup, discharge planning

**After Returning to {city}:**
- 3 months of video follow-ups (included)
- 24/7 WhatsApp support
- Local doctor coordination if needed

{journey}

## What Patients from {city} Say

{testimonial}

## Frequently Asked Questions

**How long do I need to stay in India?**
Most {city} patients stay 10-14 days total, including pre-surgery consultations, the procedure, and initial recovery.

**Is Arabic support available?**
Yes. Every patient gets a dedicated Arabic-speaking coordinator who handles everything from airport pickup to discharge planning.

**What about follow-up care?**
Included: 3 months of video consultations with your surgeon, unlimited WhatsApp support, and coordination with your local doctor if needed.

**How do I get started?**
Share your medical reports via WhatsApp ({whatsapp}) or email ({email}). A specialist will review within 24 hours.

## Ready to Start?

{cta}

**Contact {brand}:**
- WhatsApp: {whatsapp} (24/7, Arabic)
- Email: {email}
- Free Consultation: Share your medical reports for expert review

---

*Medical Disclaimer: Content for informational purposes only. Consult qualified healthcare professionals for medical decisions. Cost estimates are approximate and vary by individual case.*

*Last Updated: {updated}*
",
        brand = generator.brand_name(),
    )
}

pub(super) fn render_city(
    generator: &mut ContentGenerator<'_>,
    context: &PageContext<'_>,
) -> String {
    let city = &context.city;
    let flight = &context.flight_hours;
    let (whatsapp, email) = generator.brand_contacts();
    let brand = generator.brand_name();

    let hook = generator.phrase(&CITY_HOOKS, context);
    let reasons = generator.phrase(&CITY_REASONS, context);
    let popular = generator.popular_treatments();
    let bangalore = generator.phrase(&BANGALORE_OPENERS, context);
    let distance = generator.phrase(&DISTANCE_REMARKS, context);
    let prices = generator.phrase(&PRICE_OPENERS, context);
    let track_record = generator.phrase(&TRACK_RECORD, context);
    let patient = CITY_STORY_NAMES
        .choose(&mut generator.rng)
        .copied()
        .unwrap_or_default();
    let story = generator
        .phrase(&CITY_STORIES, context)
        .replace("{name}", patient);
    let started = generator.phrase(&GETTING_STARTED, context);
    let quality = generator.phrase(&QUALITY_ANSWERS, context);
    let cta = generator.phrase(&CITY_CTAS, context);
    let updated = generator.last_updated();

    format!(
        "# Medical Tourism from {city} to India — Your Complete Guide

{hook}

## Why Patients from {city} Choose India

{reasons}

### Popular Treatments for {city} Patients

**Most Common Procedures:**
{popular}

### Why Bangalore?

{bangalore}

- **10+ JCI-Accredited Hospitals** — Highest concentration in India
- **15,000+ International Patients Monthly** — Established infrastructure
- **English + Arabic Speaking Staff** — No language barriers
- **Modern Infrastructure** — International airport, 5-star hotels near hospitals
- **Pleasant Climate** — Comfortable year-round (unlike extreme heat of Gulf summers)

### Journey from {city} to Bangalore

**Travel:**
- Direct flights available
- Flight time: ~{flight} hours
- Airport pickup included in our packages

**Visa:**
- Indian medical visa: 48-72 hour processing
- We handle all paperwork
- Cost: $50-80
- Valid for 60 days, triple entry

**Accommodation:**
- Hotels near hospitals from $30-100/night
- Serviced apartments available for longer stays
- Companion can stay same hotel at reduced rates

{distance}

## Cost Savings: Real Numbers

{prices}

| Procedure | {city}/GCC | Bangalore | Savings | Break-Even |
|-----------|----------------|-----------|---------|-----------|
| Heart Bypass Surgery | $40,000-60,000 | $8,000-15,000 | $30,000+ | Even with flights & hotels |
| Knee Replacement | $20,000-35,000 | $5,000-9,000 | $15,000+ | Saves more than 2 weeks salary |
| IVF Cycle | $10,000-15,000 | $3,000-5,000 | $7,000+ | Try 2-3 cycles for price of 1 |
| Dental Implants (full mouth) | $15,000-30,000 | $3,000-7,000 | $15,000+ | Includes 1-week stay |

*Add ~$2,000-3,000 for flights and 2-week accommodation. You still save 60-70%.*

## What Sets Us Apart

{track_record}

**1. Dedicated Arabic Coordinator**
Not a translator—a coordinator who speaks Arabic and handles everything from airport pickup to discharge.

**2. Hospital Pre-Vetted**
We only work with JCI-accredited hospitals with proven track records for international patients.

**3. Transparent Pricing**
Cost estimate upfront. No surprises. No hidden fees.

**4. 24/7 Support**
Emergency line available throughout your stay and for 3 months after return.

**5. Follow-up Care**
Video consultations with your surgeon included. Coordination with local doctors if needed.

## Patient Stories from {city}

{story}

## How to Get Started

{started}

**Step 1: Share Medical Reports**
- WhatsApp: {whatsapp}
- Email: {email}
- Include any recent scans, test results, doctor notes

**Step 2: Expert Review (24 Hours)**
- Specialist surgeon reviews your case
- Treatment plan prepared
- Cost estimate provided
- No obligation, completely free

**Step 3: Video Consultation (Optional)**
- Talk directly with surgeon
- Ask questions
- Understand procedure details

**Step 4: Travel Planning**
- Medical visa assistance
- Flight booking support
- Hotel arranged near hospital
- Airport pickup scheduled

**Step 5: Treatment & Recovery**
- Procedure at top hospital
- Arabic coordinator throughout
- Post-op care and monitoring
- Safe return home

## Frequently Asked Questions from {city} Patients

**Is the quality really comparable to GCC hospitals?**
{quality}

**What if I need follow-up care after returning?**
3 months of video consultations included. We also coordinate with your local doctor and provide detailed medical records.

**How long do I need to stay in India?**
Depends on procedure: 7-10 days for dental work, 10-14 days for surgeries, 2-3 weeks for major procedures.

**Will I have language issues?**
No. You get dedicated Arabic-speaking coordinator. All doctors speak English. Hospital signs in English.

**Is it safe to travel for medical treatment?**
India is one of world's top medical tourism destinations. {flight}-hour flight, modern hospitals, and we handle all logistics.

## Ready to Learn More?

{cta}

**Contact {brand}:**
- WhatsApp: {whatsapp} (24/7, Arabic support)
- Email: {email}
- Free Consultation: Share medical reports for review

*Serving patients from {city} since 2015*

---

*Medical Disclaimer: Information provided for educational purposes only. Not medical advice. Consult healthcare professionals for treatment decisions.*

*Last Updated: {updated}*
"
    )
}
