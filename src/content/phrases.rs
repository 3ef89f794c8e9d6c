//! Phrase pools for page bodies. `{city}`, `{treatment}` and `{flight}` are
//! substituted after a phrase is picked.

pub(super) const FALLBACK_PATIENT_NAMES: [&str; 3] = ["Hassan", "Mariam", "Ali"];
pub(super) const CITY_STORY_NAMES: [&str; 3] = ["Ahmed", "Khalid", "Omar"];

pub(super) const ARTICLE_INTROS: [&str; 4] = [
    "Every month, over 150 patients from {city} travel to Bangalore for {treatment}. Why? Because they're discovering what healthcare really should be: world-class quality without the premium price tag. Let me walk you through what you need to know.",
    "Is {treatment} in India right for someone from {city}? I've helped coordinate care for hundreds of GCC patients, and here's what I've learned: The decision comes down to three things—quality, cost, and convenience. India delivers on all three, but there's more to the story.",
    "Last month, I met a family from {city} at Bangalore airport. They were here for {treatment}, and honestly, they were nervous. Three weeks later, when they headed home, everything had changed. The procedure was successful, costs were 70% lower than quotes back home, and they felt genuinely cared for. That's the experience we create for every patient.",
    "Planning {treatment} from {city} to India? You're in the right place. We've been coordinating medical travel between the GCC and India since 2015, and we know exactly what works—and what to watch out for. This guide covers everything from hospital selection to visa processing, written specifically for patients from {city}.",
];

pub(super) const BEYOND_PRICE: [&str; 3] = [
    "But saving money means nothing if the quality isn't there. So let's address that head-on.",
    "Cost savings get attention, but here's what keeps patients coming back:",
    "Here's what actually matters when you're making this decision:",
];

pub(super) const TECHNOLOGY_REASONS: [&str; 3] = [
    "Why? Competition.",
    "Simple reason: they have to compete globally.",
    "They're competing for international patients, which means staying current with technology.",
];

pub(super) const COORDINATOR_DUTIES: [&str; 3] = [
    "They handle everything—airport pickup, hospital paperwork, doctor appointments, pharmacy runs, even booking your return flight.",
    "From the moment you land until you board your return flight, someone who speaks your language is available 24/7.",
    "No translator apps needed. No miscommunication about medical instructions. Just clear, direct communication in Arabic.",
];

pub(super) const VISA_NOTES: [&str; 3] = [
    "Getting an Indian medical visa from the UAE is straightforward—usually processed within 48-72 hours. We handle the paperwork.",
    "The visa process? We've done it hundreds of times. You provide the documents, we ensure everything's in order.",
    "Indian medical visas are actually easier than tourist visas. Processing takes 2-3 days, and we guide you through each step.",
];

pub(super) const TESTIMONIALS: [&str; 3] = [
    "\"{name}, {age}, from {city} had {treatment} at Narayana Hospital {months} months ago. {name} told us: The quality exceeded what I experienced in the GCC. My Arabic coordinator made everything smooth—from airport pickup to follow-up calls after I returned home.\"",
    "\"I was nervous about traveling to India for surgery,\" admits {name}, a {age}-year-old from {city}. \"But the team at Manipal Hospital treated me like family. The surgeon explained everything in detail, my coordinator spoke perfect Arabic, and the results? Better than I hoped for.\"",
    "\"{name} from {city} saved nearly $15,000 by choosing India for {treatment}. More importantly, the success rate and care quality matched—if not exceeded—what is available locally. {name} now recommends us to friends and family.\"",
];

pub(super) const ROADMAP_NOTES: [&str; 3] = [
    "No surprises, no confusion—just a clear roadmap.",
    "This is based on hundreds of patient journeys we've coordinated.",
    "I'm sharing this so you know exactly what to expect.",
];

pub(super) const RESPONSE_NOTES: [&str; 3] = [
    "Most patients are surprised by how quickly we respond. We're used to working with international patients—speed matters.",
    "Quick turnaround isn't just good service; when you're planning medical treatment, waiting days for responses adds unnecessary stress.",
    "We prioritize medical queries. While most companies take 3-5 days, our surgeons review cases within 24 hours.",
];

pub(super) const ARRIVAL_NOTES: [&str; 3] = [
    "One thing patients always mention: how organized everything feels. No rushing, no chaos—just a well-planned schedule.",
    "We build in rest time. Flying, even if it's just 3-4 hours, is tiring. You need to be in good condition for surgery.",
    "The hospital is used to international patients. They know what questions GCC patients typically ask and proactively address them.",
];

pub(super) const AFTERCARE_NOTES: [&str; 3] = [
    "The care doesn't stop when you board your return flight. That's when follow-up becomes critical.",
    "Post-surgery support is where many medical tourism companies fail. We don't. Follow-up is included in your package.",
    "We stay in touch. Not daily check-ins—that's annoying—but scheduled video calls and responsive support when you need it.",
];

pub(super) const HOSPITAL_INTROS: [&str; 3] = [
    "Hospital selection matters. A lot. Here are the facilities we work with most often:",
    "Not all hospitals are equal. We've vetted these based on outcomes, not marketing:",
    "These aren't just recommendations—these are hospitals where we send our own family members:",
];

pub(super) const HOSPITAL_HIGHLIGHTS: [&str; 3] = [
    "Over {volume} procedures annually with a {rate} success rate.",
    "JCI-accredited since 2012, with {rate} success rate across all procedures.",
    "{volume}+ surgeries each year—that's volume that builds expertise.",
];

pub(super) const HOSPITAL_FEEDBACK: [&str; 3] = [
    "What patients say: 'The hospital feels more like a hotel. Clean, modern, and everyone speaks English. My coordinator spoke Arabic, which made everything easier.'",
    "Real patient feedback: 'I expected good. I got exceptional. The surgeon spent 45 minutes explaining everything, and my room had a view of the garden.'",
    "Why patients choose {hospital}: Combine international standards with Indian hospitality. That's rare.",
];

pub(super) const FAQ_INTROS: [&str; 3] = [
    "I answer these questions daily. Here's what most patients want to know:",
    "Let me address the questions I hear most often:",
    "These are the real concerns patients share with me:",
];

/// Question and answer pairs; `{gcc}`, `{india}` and `{savings}` carry the cost data.
pub(super) const ARTICLE_FAQS: [(&str, &str); 8] = [
    (
        "How long do I need to stay in Bangalore for {treatment}?",
        "Most {city} patients stay 10-14 days total. This includes pre-surgery consultations (2-3 days), the procedure itself, and initial recovery (5-7 days). Your surgeon will give you a personalized timeline during your consultation, but plan for two weeks to be safe.",
    ),
    (
        "Will language be a barrier?",
        "Honestly? No. Every patient from the GCC gets an Arabic-speaking coordinator. All doctors speak fluent English. Hospital signs are in English. And in Bangalore, you'll find Arabic restaurants, halal food, and even prayer rooms in major hospitals. It's more comfortable than you might expect.",
    ),
    (
        "What if something goes wrong after I return home?",
        "This is the right question to ask. We provide 3 months of free video follow-ups with your surgeon. If there's a complication, we'll coordinate with doctors in {city} or arrange for you to return (most hospitals offer revision procedures within warranty periods). We also have a 24/7 emergency line.",
    ),
    (
        "How do costs in India compare to {city} really?",
        "Real numbers: {treatment} typically costs {gcc} in the GCC. In Bangalore? {india}. Add $1,500-2,500 for flights and accommodation. You're still saving {savings}. And no, quality isn't compromised—these are JCI-accredited hospitals with internationally trained doctors.",
    ),
    (
        "Is the medical visa process complicated?",
        "Actually, it's one of the easiest visas to get. From {city}, processing takes 48-72 hours. We handle most of the paperwork—you provide your passport, medical summary, and hospital letter (which we prepare). Cost is around $50-80. The visa is valid for triple entry and 60 days.",
    ),
    (
        "Can my family member accompany me?",
        "Absolutely. We actually recommend it. Your companion can get a medical attendant visa (same process, same timeline). Most hotels near hospitals offer companion rates. And honestly, having someone with you during recovery makes a big difference—emotionally and practically.",
    ),
    (
        "What about follow-up care?",
        "Built into your package: video consultations for 3 months, unlimited WhatsApp support, and coordination with your local doctor if needed. We also send detailed medical records that any doctor in {city} can review. You're not on your own after treatment.",
    ),
    (
        "How do I know if I'm a good candidate?",
        "Share your medical reports with us (WhatsApp or email). A surgeon will review within 24 hours and tell you honestly if India is right for your case. Sometimes it's not—if your condition requires extensive follow-up near home, we'll say so. We'd rather be honest upfront than have you travel unnecessarily.",
    ),
];

pub(super) const ARTICLE_CTAS: [&str; 3] = [
    "If you're in {city} and considering {treatment}, let's talk. No sales pitch—just honest answers to your questions.",
    "Planning {treatment} from {city} starts with a conversation. Share your medical reports, and we'll provide a detailed assessment within 24 hours.",
    "Every patient from {city} who contacts us gets a personalized evaluation. No generic quotes—real numbers based on your specific case.",
];

pub(super) const TREATMENT_HOOKS: [&str; 3] = [
    "Every week, dozens of patients from {city} discover they can get {treatment} in India for 60-70% less—without compromising quality.",
    "Planning {treatment} from {city}? You're not alone. Hundreds of GCC patients choose India each month for world-class care at affordable prices.",
    "What if I told you that {treatment} in India costs less than a third of what you'd pay in {city}—and the quality is often better?",
];

pub(super) const TREATMENT_REASONS: [&str; 3] = [
    "The math is simple. The quality isn't compromised. The experience exceeds expectations.",
    "Let me break down what makes India the #1 destination for medical tourism from the GCC.",
    "Here's what matters when you're considering medical treatment abroad:",
];

pub(super) const SAVINGS_REMARKS: [&str; 3] = [
    "That's not a small difference. For many families, these savings make treatment accessible when it wouldn't be otherwise.",
    "And before you ask—no, lower cost doesn't mean lower quality. More on that in a moment.",
    "The question isn't whether India is cheaper. The question is: Is the quality comparable? Short answer: Often it's better.",
];

pub(super) const QUALITY_OPENERS: [&str; 3] = [
    "Here's what most people don't realize: Bangalore has more JCI-accredited hospitals than most Western cities.",
    "Let me address the elephant in the room: Yes, the quality is excellent. Here's why:",
    "Quality concerns are valid. Here's why you can trust Bangalore hospitals:",
];

pub(super) const JOURNEY_REMARKS: [&str; 3] = [
    "The entire process is designed around international patients. You're not an afterthought—you're the focus.",
    "We've coordinated hundreds of patient journeys from the GCC. The process is smooth because we've refined it over years.",
    "Everything—from airport pickup to follow-up care—is handled by your dedicated Arabic-speaking coordinator.",
];

pub(super) const TREATMENT_TESTIMONIALS: [&str; 3] = [
    "\"I saved over $20,000 and got better care than I would have locally. My coordinator spoke Arabic, the hospital was spotless, and the surgeon had 25 years of experience.\" — Patient from {city}, {months} months ago",
    "\"Initially skeptical, but the quality exceeded expectations. The hospital was more modern than facilities I have seen in the GCC.\" — {city} patient testimonial",
    "\"The cost savings were significant, but what impressed me most was the attention to detail. Every staff member knew my case.\" — Patient from {city}",
];

pub(super) const TREATMENT_CTAS: [&str; 3] = [
    "If you're in {city} and considering {treatment}, let's talk. Free consultation, no obligation.",
    "Over 150 patients from {city} have trusted us with their medical journey. You could be next.",
    "Schedule a free consultation today. Get answers to your questions from specialists who've coordinated hundreds of GCC patient journeys.",
];

pub(super) const CITY_HOOKS: [&str; 3] = [
    "Last year, over 2,000 patients from {city} traveled to India for medical treatment. This year, that number is expected to double.",
    "Planning medical treatment abroad from {city}? You've come to the right place.",
    "India has become the #1 medical tourism destination for {city} residents. Here's why—and what you need to know.",
];

pub(super) const CITY_REASONS: [&str; 3] = [
    "The reasons are simple: 60-70% cost savings, JCI-accredited hospitals, and Arabic-speaking support throughout your journey.",
    "Three things matter most: Quality, cost, and convenience. India delivers on all three.",
    "Let's be direct: India offers world-class healthcare at prices that make sense for families from {city}.",
];

pub(super) const BANGALORE_OPENERS: [&str; 3] = [
    "Bangalore isn't just India's tech capital—it's also the medical tourism hub of Asia.",
    "Here's what makes Bangalore special for medical tourists:",
    "Bangalore has more JCI-accredited hospitals than most Western cities. That's not an accident.",
];

pub(super) const DISTANCE_REMARKS: [&str; 3] = [
    "The {flight}-hour flight from {city} is shorter than many domestic trips. And the savings? Enough to make it worthwhile.",
    "Think of it this way: A short {flight}-hour flight could save your family $20,000-50,000.",
    "Distance isn't the barrier you might think. {city} to Bangalore is closer than {city} to many European cities—and the healthcare is world-class.",
];

pub(super) const PRICE_OPENERS: [&str; 3] = [
    "Let's talk specifics. Here's what procedures actually cost:",
    "These aren't estimates—these are typical costs we see from {city} patients:",
    "Here are real numbers from patients who traveled from {city}:",
];

pub(super) const TRACK_RECORD: [&str; 3] = [
    "We've been coordinating medical tourism from the GCC since 2015. Here's what we've learned:",
    "Having helped over 1,500 GCC patients, we know what matters:",
    "After years of coordinating patient journeys from the Gulf, we've built a system that works:",
];

pub(super) const CITY_STORIES: [&str; 3] = [
    "\"I was skeptical about traveling to India for heart surgery. My coordinator made everything easy—handled paperwork, hotel, even pharmacy runs. The surgeon? Trained at Mayo Clinic. Saved $35,000 and got world-class care.\" — {name}, {city} patient",
    "\"The hospital was nicer than the one I visited in Dubai for consultation. Staff spoke Arabic, food was adjusted to my preferences, and the cost? 70% less than my Dubai quote.\" — Patient from {city}",
    "\"My wife needed IVF. Three failed cycles locally cost us $30,000. We tried once in Bangalore—it worked. Cost $4,500 total including flights and hotel. We now recommend Shifa AlHind to everyone.\" — {city} couple",
];

pub(super) const GETTING_STARTED: [&str; 3] = [
    "The process is simpler than you think:",
    "Here's how {city} patients typically start their journey:",
    "Getting started takes 5 minutes:",
];

pub(super) const QUALITY_ANSWERS: [&str; 3] = [
    "Often it's better. Bangalore hospitals invest heavily in technology and attract internationally-trained surgeons.",
    "JCI accreditation means same standards as top hospitals worldwide. Many surgeons trained in US/UK.",
    "We wouldn't send our own families if quality wasn't excellent. Most patients are surprised by how modern facilities are.",
];

pub(super) const CITY_CTAS: [&str; 3] = [
    "Over 2,000 patients from {city} trusted us last year. Join them.",
    "Free consultation. No obligation. Just honest answers to your questions.",
    "Schedule a free consultation today and get expert medical review within 24 hours.",
];
