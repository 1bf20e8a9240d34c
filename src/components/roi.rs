use web_sys::{HtmlInputElement, InputEvent};
use yew::prelude::*;

// Assumptions behind the estimate, in minutes and working days.
const MINS_SAVED_PER_PATIENT: u64 = 4;
const APPT_DURATION_MINS: u64 = 20;
const WORK_DAYS_PER_MONTH: u64 = 22;
const MONTHS_PER_YEAR: u64 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoiInputs {
    pub docs: u64,
    pub patients: u64,
    pub ticket: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiEstimate {
    pub total_mins_saved_day: u64,
    pub hours_saved_month: u64,
    pub extra_patients_per_doc_day: f64,
    pub total_new_appts_year: u64,
    pub annual_revenue: u64,
}

impl RoiEstimate {
    pub fn compute(inputs: RoiInputs) -> Self {
        let days_per_year = WORK_DAYS_PER_MONTH * MONTHS_PER_YEAR;

        // The ticket field is free-form numeric input; the math saturates
        // rather than overflowing on absurd values.
        let total_mins_saved_day = inputs
            .docs
            .saturating_mul(inputs.patients)
            .saturating_mul(MINS_SAVED_PER_PATIENT);
        let hours_saved_month =
            (total_mins_saved_day.saturating_mul(WORK_DAYS_PER_MONTH) as f64 / 60.0).round() as u64;
        let extra_patients_per_doc_day =
            inputs.patients.saturating_mul(MINS_SAVED_PER_PATIENT) as f64
                / APPT_DURATION_MINS as f64;
        let total_new_appts_year =
            (extra_patients_per_doc_day * inputs.docs as f64 * days_per_year as f64).round() as u64;
        let annual_revenue = total_new_appts_year.saturating_mul(inputs.ticket);

        Self {
            total_mins_saved_day,
            hours_saved_month,
            extra_patients_per_doc_day,
            total_new_appts_year,
            annual_revenue,
        }
    }
}

fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

/// en-US currency, no fraction digits: 528000000 -> "$528,000,000".
pub fn format_usd(value: u64) -> String {
    format!("${}", group_digits(value, ','))
}

/// es-CL grouping: 10560 -> "10.560".
pub fn format_es_cl(value: u64) -> String {
    group_digits(value, '.')
}

/// Rounds to one decimal and drops a trailing ".0": 4.0 -> "4", 4.26 -> "4.3".
pub fn format_one_decimal(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{:.1}", rounded)
    }
}

fn parse_field(e: &InputEvent) -> u64 {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value().trim().parse().unwrap_or(0)
}

#[function_component(RoiCalculator)]
pub fn roi_calculator() -> Html {
    let inputs = use_state(|| RoiInputs {
        docs: 10,
        patients: 20,
        ticket: 50_000,
    });

    let on_docs = {
        let inputs = inputs.clone();
        Callback::from(move |e: InputEvent| {
            inputs.set(RoiInputs {
                docs: parse_field(&e),
                ..*inputs
            });
        })
    };

    let on_patients = {
        let inputs = inputs.clone();
        Callback::from(move |e: InputEvent| {
            inputs.set(RoiInputs {
                patients: parse_field(&e),
                ..*inputs
            });
        })
    };

    let on_ticket = {
        let inputs = inputs.clone();
        Callback::from(move |e: InputEvent| {
            inputs.set(RoiInputs {
                ticket: parse_field(&e),
                ..*inputs
            });
        })
    };

    let estimate = RoiEstimate::compute(*inputs);

    html! {
        <section class="roi-section">
            <div class="roi-header">
                <h2>{"¿Cuánto vale el tiempo de sus médicos?"}</h2>
                <p>{"Ajuste los valores de su centro y vea el retorno estimado."}</p>
            </div>

            <div class="roi-grid">
                <div class="roi-inputs">
                    <label class="roi-field">
                        <span class="roi-label">
                            {"Médicos en su centro: "}
                            <strong>{inputs.docs}</strong>
                        </span>
                        <input type="range" min="1" max="50" value={inputs.docs.to_string()} oninput={on_docs} />
                    </label>

                    <label class="roi-field">
                        <span class="roi-label">
                            {"Pacientes por médico al día: "}
                            <strong>{inputs.patients}</strong>
                        </span>
                        <input type="range" min="1" max="60" value={inputs.patients.to_string()} oninput={on_patients} />
                    </label>

                    <label class="roi-field">
                        <span class="roi-label">{"Valor promedio de una consulta (CLP)"}</span>
                        <input type="number" min="0" value={inputs.ticket.to_string()} oninput={on_ticket} />
                    </label>
                </div>

                <div class="roi-results">
                    <div class="roi-result-card">
                        <span class="roi-result-value">{estimate.hours_saved_month}</span>
                        <span class="roi-result-label">{"horas ahorradas al mes"}</span>
                    </div>
                    <div class="roi-result-card">
                        <span class="roi-result-value">{format_es_cl(estimate.total_new_appts_year)}</span>
                        <span class="roi-result-label">{"citas nuevas al año"}</span>
                    </div>
                    <div class="roi-result-card highlight">
                        <span class="roi-result-value">{format_usd(estimate.annual_revenue)}</span>
                        <span class="roi-result-label">{"ingreso anual estimado"}</span>
                    </div>
                    <p class="roi-copy">
                        {format!(
                            "\"Al automatizar la ficha clínica y la agenda, sus médicos pueden atender {} pacientes más por día con el mismo horario laboral.\"",
                            format_one_decimal(estimate.extra_patients_per_doc_day)
                        )}
                    </p>
                </div>
            </div>

            <style>
                {r#"
                .roi-section {
                    padding: 5rem 2rem;
                    max-width: 1000px;
                    margin: 0 auto;
                }

                .roi-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .roi-header h2 {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .roi-header p {
                    color: #999;
                    font-size: 1.2rem;
                }

                .roi-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: start;
                }

                .roi-field {
                    display: block;
                    margin-bottom: 2rem;
                }

                .roi-label {
                    display: block;
                    color: #ddd;
                    margin-bottom: 0.75rem;
                }

                .roi-label strong {
                    color: #7EB2FF;
                }

                .roi-field input[type="range"] {
                    width: 100%;
                    accent-color: #1E90FF;
                }

                .roi-field input[type="number"] {
                    width: 100%;
                    padding: 0.75rem;
                    border-radius: 8px;
                    border: 1px solid rgba(30, 144, 255, 0.3);
                    background: rgba(26, 26, 26, 0.85);
                    color: #fff;
                    font-size: 1rem;
                }

                .roi-results {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .roi-result-card {
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                    padding: 1.25rem 1.5rem;
                }

                .roi-result-card.highlight {
                    border-color: rgba(30, 144, 255, 0.4);
                }

                .roi-result-value {
                    display: block;
                    font-size: 1.8rem;
                    color: #7EB2FF;
                }

                .roi-result-label {
                    color: #999;
                }

                .roi-copy {
                    color: #ddd;
                    font-style: italic;
                    line-height: 1.6;
                    margin-top: 0.5rem;
                }

                @media (max-width: 768px) {
                    .roi-section {
                        padding: 3rem 1rem;
                    }

                    .roi-header h2 {
                        font-size: 2rem;
                    }

                    .roi-grid {
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_estimate() {
        let estimate = RoiEstimate::compute(RoiInputs {
            docs: 10,
            patients: 20,
            ticket: 50_000,
        });
        assert_eq!(estimate.total_mins_saved_day, 800);
        assert_eq!(estimate.hours_saved_month, 293);
        assert_eq!(estimate.extra_patients_per_doc_day, 4.0);
        assert_eq!(estimate.total_new_appts_year, 10_560);
        assert_eq!(estimate.annual_revenue, 528_000_000);
    }

    #[test]
    fn zero_inputs_produce_zero_estimate() {
        let estimate = RoiEstimate::compute(RoiInputs {
            docs: 0,
            patients: 0,
            ticket: 0,
        });
        assert_eq!(estimate.total_mins_saved_day, 0);
        assert_eq!(estimate.hours_saved_month, 0);
        assert_eq!(estimate.extra_patients_per_doc_day, 0.0);
        assert_eq!(estimate.total_new_appts_year, 0);
        assert_eq!(estimate.annual_revenue, 0);
    }

    #[test]
    fn extreme_ticket_saturates_instead_of_panicking() {
        let estimate = RoiEstimate::compute(RoiInputs {
            docs: 50,
            patients: 60,
            ticket: 1_000_000_000_000_000,
        });
        assert_eq!(estimate.total_new_appts_year, 158_400);
        assert_eq!(estimate.annual_revenue, u64::MAX);
    }

    #[test]
    fn usd_formatting() {
        assert_eq!(format_usd(528_000_000), "$528,000,000");
        assert_eq!(format_usd(1_000), "$1,000");
        assert_eq!(format_usd(999), "$999");
        assert_eq!(format_usd(0), "$0");
    }

    #[test]
    fn es_cl_formatting() {
        assert_eq!(format_es_cl(10_560), "10.560");
        assert_eq!(format_es_cl(1_234_567), "1.234.567");
        assert_eq!(format_es_cl(42), "42");
    }

    #[test]
    fn one_decimal_drops_trailing_zero() {
        assert_eq!(format_one_decimal(4.0), "4");
        assert_eq!(format_one_decimal(4.26), "4.3");
        assert_eq!(format_one_decimal(0.0), "0");
        assert_eq!(format_one_decimal(2.04), "2");
    }
}
