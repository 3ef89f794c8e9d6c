use rand::seq::SliceRandom;

use super::phrases::{
    AFTERCARE_NOTES, ARRIVAL_NOTES, ARTICLE_CTAS, ARTICLE_FAQS, ARTICLE_INTROS, BEYOND_PRICE,
    COORDINATOR_DUTIES, FAQ_INTROS, HOSPITAL_FEEDBACK, HOSPITAL_HIGHLIGHTS, HOSPITAL_INTROS,
    RESPONSE_NOTES, ROADMAP_NOTES, TECHNOLOGY_REASONS, TESTIMONIALS, VISA_NOTES,
};
use super::{
    ContentGenerator, PageContext, average_savings, format_usd, format_usd_range, group_thousands,
};

pub(super) fn render(generator: &mut ContentGenerator<'_>, context: &PageContext<'_>) -> String {
    let sections = [
        format!("# {}", context.headline),
        generator.phrase(&ARTICLE_INTROS, context),
        why_choose(generator, context),
        testimonial(generator, context),
        journey(generator, context),
        hospitals(generator, context),
        faq(generator, context),
        closing(generator, context),
    ];
    sections.join("\n\n")
}

fn why_choose(generator: &mut ContentGenerator<'_>, context: &PageContext<'_>) -> String {
    let city = &context.city;
    let name = context.treatment_name();
    let treatment = &context.treatment;
    let (gcc_min, gcc_max) = (
        format_usd(treatment.cost_gcc.min),
        format_usd(treatment.cost_gcc.max),
    );
    let (india_min, india_max) = (
        format_usd(treatment.cost_india.min),
        format_usd(treatment.cost_india.max),
    );
    let savings = &treatment.savings_percent;
    let total = format_usd(average_savings(treatment));

    let beyond = generator.phrase(&BEYOND_PRICE, context);
    let technology = generator.phrase(&TECHNOLOGY_REASONS, context);
    let coordinator = generator.phrase(&COORDINATOR_DUTIES, context);
    let visa = generator.phrase(&VISA_NOTES, context);

    format!(
        "## Why {city} Patients Choose India for {name}

Here's something that might surprise you: Bangalore has more JCI-accredited hospitals than any other city in Asia. That's not marketing—it's fact. And these aren't just good hospitals; they're where doctors trained at Johns Hopkins, Mayo Clinic, and Cleveland Clinic are now practicing.

### The Real Numbers

Let's talk money—because that's often the first question. A patient from {city} typically pays between {gcc_min} and {gcc_max} for {name} in the GCC. In Bangalore? The same procedure, same quality standards, runs between {india_min} and {india_max}.

That's a savings of {savings}. But here's what matters more: you're not compromising on quality to save money.

**Cost Breakdown for {city} Patients:**

| Expense | GCC | India | Your Savings |
|---------|-----|-------|--------------|
| Procedure Cost | {gcc_min}-{gcc_max} | {india_min}-{india_max} | {savings} |
| Hospital Stay (per night) | $800-1,200 | $150-300 | ~75% |
| Follow-up Consultations | $150-300 | $30-60 | ~80% |
| **Total Average Savings** | - | - | **{total}+** |

*Note: Costs are estimates and vary based on complexity. Add ~$1,500-2,500 for flights and accommodation for companion.*

### Beyond the Price Tag

{beyond}

**1. Internationally Trained Surgeons**
Most cardiac surgeons in Bangalore have performed 2,000+ procedures. The surgeon who handles your case? Likely trained internationally and has success rates that match—or exceed—global benchmarks.

**2. Technology That's Current**
Da Vinci surgical robots, CyberKnife systems, 3T MRI scanners—Bangalore hospitals invest heavily in equipment. {technology}

**3. Arabic-Speaking Coordinators**
Every patient from {city} gets a dedicated coordinator who speaks Arabic. {coordinator}

**4. Medical Visa Support**
{visa}"
    )
}

fn testimonial(generator: &mut ContentGenerator<'_>, context: &PageContext<'_>) -> String {
    let name = context
        .patient_names
        .choose(&mut generator.rng)
        .cloned()
        .unwrap_or_default();
    let age = generator.between(35, 62);
    let months = generator.between(3, 18);

    generator
        .phrase(&TESTIMONIALS, context)
        .replace("{name}", &name)
        .replace("{age}", &age.to_string())
        .replace("{months}", &months.to_string())
}

fn journey(generator: &mut ContentGenerator<'_>, context: &PageContext<'_>) -> String {
    let city = &context.city;
    let flight = &context.flight_hours;
    let (whatsapp, _) = generator.brand_contacts();

    let roadmap = generator.phrase(&ROADMAP_NOTES, context);
    let response = generator.phrase(&RESPONSE_NOTES, context);
    let arrival = generator.phrase(&ARRIVAL_NOTES, context);
    let aftercare = generator.phrase(&AFTERCARE_NOTES, context);

    format!(
        "## Your Complete Journey: {city} to Bangalore

Let me walk you through exactly what happens, step by step. {roadmap}

### Before You Leave {city}

**Step 1: Free Consultation (Week 1)**
- Share your medical reports via WhatsApp ({whatsapp}) or email
- Expert surgeon reviews within 24 hours (yes, including weekends)
- Receive detailed treatment plan and cost estimate
- No obligation, no payment required at this stage

{response}

**Step 2: Treatment Planning (Week 1-2)**
- Video consultation with your surgeon (if desired)
- Arabic coordinator assigned to your case
- Treatment timeline finalized
- Pre-surgery instructions provided

**Step 3: Travel Arrangements (Week 2-3)**
- We help with medical visa application
- Flight booking assistance (direct flights from {city} take ~{flight} hours)
- Hotel accommodation near hospital arranged
- Airport pickup scheduled

### In Bangalore

**Step 4: Arrival & Pre-Surgery (Days 1-3)**
Your coordinator meets you at Kempegowda International Airport. From there:

- Transfer to hotel (20-30 minutes from airport)
- Rest day (Day 1)
- Hospital consultation and pre-surgery tests (Day 2)
- Anesthesiologist consultation and final prep (Day 3)

{arrival}

**Step 5: Surgery Day (Day 4)**
- Procedure performed by senior consultant
- Real-time updates sent to family back home
- Recovery in world-class ICU if needed

**Step 6: Recovery & Follow-up (Days 5-10)**
- Daily doctor rounds
- Physiotherapy (if required)
- Arabic coordinator visits daily
- Discharge planning

### Returning Home

**Step 7: Post-Treatment Care (Days 11-14)**
- Final surgeon consultation
- Detailed discharge summary and prescriptions
- Follow-up schedule planned
- Airport transfer for return flight

**After You're Back in {city}**
- Video follow-ups with your surgeon (included for 3 months)
- 24/7 WhatsApp support
- Local doctor coordination if needed
- Medical records available anytime

{aftercare}"
    )
}

fn hospitals(generator: &mut ContentGenerator<'_>, context: &PageContext<'_>) -> String {
    let name = context.treatment_name();
    let intro = generator.phrase(&HOSPITAL_INTROS, context);
    let mut section = format!("## Top Hospitals for {name} in Bangalore\n\n{intro}");

    for (index, hospital) in generator.hospitals(name).into_iter().enumerate() {
        let volume = group_thousands(hospital.surgeries_per_year);
        let highlight = generator
            .choose(&HOSPITAL_HIGHLIGHTS)
            .replace("{volume}", &volume)
            .replace("{rate}", &hospital.success_rate);
        let feedback = generator
            .choose(&HOSPITAL_FEEDBACK)
            .replace("{hospital}", &hospital.name);

        section.push_str(&format!(
            "\n\n### {number}. {hospital_name}

**What stands out:** {highlight}

- **JCI Accredited:** {jci}
- **Arabic-Speaking Staff:** {arabic}
- **Specializations:** {specialties}
- **Annual Volume:** {volume}+ procedures
- **Success Rate:** {rate}

{feedback}",
            number = index + 1,
            hospital_name = hospital.name,
            jci = if hospital.jci_accredited { "Yes" } else { "No" },
            arabic = if hospital.arabic_staff { "Available 24/7" } else { "Limited" },
            specialties = hospital.specialties.join(", "),
            rate = hospital.success_rate,
        ));
    }

    section
}

fn faq(generator: &mut ContentGenerator<'_>, context: &PageContext<'_>) -> String {
    let treatment = &context.treatment;
    let gcc = format_usd_range(treatment.cost_gcc);
    let india = format_usd_range(treatment.cost_india);

    let intro = generator.phrase(&FAQ_INTROS, context);
    let count = generator.between(6, 7) as usize;
    let selected: Vec<(&str, &str)> = ARTICLE_FAQS
        .choose_multiple(&mut generator.rng, count)
        .copied()
        .collect();

    let mut section = format!("## Common Questions from GCC Patients\n\n{intro}");
    for (question, answer) in selected {
        let answer = context
            .fill(answer)
            .replace("{gcc}", &gcc)
            .replace("{india}", &india)
            .replace("{savings}", &treatment.savings_percent);
        section.push_str(&format!("\n\n### {}\n\n{}", context.fill(question), answer));
    }
    section
}

fn closing(generator: &mut ContentGenerator<'_>, context: &PageContext<'_>) -> String {
    let cta = generator.phrase(&ARTICLE_CTAS, context);
    let (whatsapp, email) = generator.brand_contacts();
    let updated = generator.last_updated();

    format!(
        "## Ready to Start Your Journey?

{cta}

**Contact Us Today:**
- **WhatsApp:** {whatsapp} (24/7, Arabic support)
- **Email:** {email}
- **Free Consultation:** Share your medical reports for expert review

We've been coordinating medical travel between the GCC and India since 2015. We know what works—and we're here to help.

---

*Medical Disclaimer: This content is for informational purposes only and does not constitute medical advice. Always consult with qualified healthcare professionals for medical decisions. Cost estimates are approximate and vary based on individual cases.*

*Last Updated: {updated}*
"
    )
}
